//! Macros for reducing boilerplate when defining entities

/// Implement [`Entity`](crate::core::Entity) for a struct with a `pub id: String` field
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Dish {
///     pub id: String,
///     pub name: String,
/// }
///
/// impl_entity!(Dish, "dish", "dishes");
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $singular:expr, $plural:expr) => {
        impl $crate::core::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}
