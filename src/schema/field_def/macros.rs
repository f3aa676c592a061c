//! Macros for field declarations
//!
//! This module provides macros to reduce boilerplate when declaring which
//! fields of a type are projected.

/// Build the field list of a host type
///
/// Entries are separated by commas:
///
/// - `name` reads the accessor `name` under the symbol key `:name`
/// - `"name"` reads the accessor `name` under the string key `"name"`
/// - `key => |value| expr` computes the field from the instance
/// - `key =>? |value| expr` does the same with a closure returning
///   `anyhow::Result<_>`
///
/// Keys of computed fields may be identifiers (symbol keys) or string
/// literals (string keys).
///
/// # Example
///
/// ```rust
/// use projectable::{field_specs, FieldKey, ProjectionSchema};
///
/// struct Account {
///     balance: i64,
/// }
///
/// let fields = field_specs!(Account;
///     balance,
///     "owner",
///     in_credit => |account| account.balance > 0,
///     "ratio" =>? |account| {
///         anyhow::ensure!(account.balance != 0, "empty account");
///         Ok(100 / account.balance)
///     },
/// );
///
/// let schema = ProjectionSchema::declare(fields).unwrap();
/// assert_eq!(schema.len(), 4);
/// assert!(schema.contains_key(&FieldKey::string("owner")));
/// assert!(schema.contains_key(&FieldKey::symbol("in_credit")));
/// ```
#[macro_export]
macro_rules! field_specs {
    (@push $specs:ident, $ty:ty; ) => {};
    (@push $specs:ident, $ty:ty; $key:ident =>? $f:expr $(, $($rest:tt)*)?) => {
        $specs.push($crate::FieldSpec::<$ty>::try_computed(
            $crate::FieldKey::symbol(stringify!($key)),
            $f,
        ));
        $crate::field_specs!(@push $specs, $ty; $($($rest)*)?);
    };
    (@push $specs:ident, $ty:ty; $key:ident => $f:expr $(, $($rest:tt)*)?) => {
        $specs.push($crate::FieldSpec::<$ty>::computed(
            $crate::FieldKey::symbol(stringify!($key)),
            $f,
        ));
        $crate::field_specs!(@push $specs, $ty; $($($rest)*)?);
    };
    (@push $specs:ident, $ty:ty; $key:ident $(, $($rest:tt)*)?) => {
        $specs.push($crate::FieldSpec::<$ty>::attribute(
            $crate::FieldKey::symbol(stringify!($key)),
        ));
        $crate::field_specs!(@push $specs, $ty; $($($rest)*)?);
    };
    (@push $specs:ident, $ty:ty; $key:literal =>? $f:expr $(, $($rest:tt)*)?) => {
        $specs.push($crate::FieldSpec::<$ty>::try_computed(
            $crate::FieldKey::string($key),
            $f,
        ));
        $crate::field_specs!(@push $specs, $ty; $($($rest)*)?);
    };
    (@push $specs:ident, $ty:ty; $key:literal => $f:expr $(, $($rest:tt)*)?) => {
        $specs.push($crate::FieldSpec::<$ty>::computed(
            $crate::FieldKey::string($key),
            $f,
        ));
        $crate::field_specs!(@push $specs, $ty; $($($rest)*)?);
    };
    (@push $specs:ident, $ty:ty; $key:literal $(, $($rest:tt)*)?) => {
        $specs.push($crate::FieldSpec::<$ty>::attribute(
            $crate::FieldKey::string($key),
        ));
        $crate::field_specs!(@push $specs, $ty; $($($rest)*)?);
    };
    ($ty:ty; $($body:tt)*) => {{
        #[allow(unused_mut)]
        let mut specs = ::std::vec::Vec::<$crate::FieldSpec<$ty>>::new();
        $crate::field_specs!(@push specs, $ty; $($body)*);
        specs
    }};
}

/// Implement [`Projectable`](crate::Projectable) for a host type
///
/// The field list uses the [`field_specs!`] syntax. The schema is built the
/// first time it is needed and shared for the rest of the process; a
/// malformed declaration is reported by every projection of the type.
///
/// A leading `inherit Parent => lens;` clause takes over the fields of
/// `Parent`, evaluated against the `&Parent` returned by `lens`. Fields
/// declared in the body override inherited ones.
///
/// The host type must implement [`AttributeSource`](crate::AttributeSource)
/// and cannot be generic.
///
/// # Example
///
/// ```rust
/// use projectable::{projectable, AttributeSource, FieldKey, Projectable};
///
/// #[derive(AttributeSource)]
/// struct User {
///     id: u64,
///     password_hash: String,
/// }
///
/// #[derive(AttributeSource)]
/// struct Admin {
///     #[attribute(skip)]
///     user: User,
///     role: String,
/// }
///
/// projectable! {
///     User {
///         id,
///         has_password => |user| !user.password_hash.is_empty(),
///     }
/// }
///
/// projectable! {
///     Admin {
///         inherit User => |admin| &admin.user;
///         role,
///     }
/// }
///
/// let admin = Admin {
///     user: User { id: 7, password_hash: "x".into() },
///     role: "owner".into(),
/// };
/// let map = admin.to_map().unwrap();
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.symbol("id"), Some(&serde_json::json!(7)));
/// assert!(map.get(&FieldKey::symbol("password_hash")).is_none());
/// ```
#[macro_export]
macro_rules! projectable {
    ($ty:ty { inherit $parent:ty => $lens:expr; $($body:tt)* }) => {
        impl $crate::Projectable for $ty {
            fn projection_schema() -> ::std::result::Result<
                &'static $crate::ProjectionSchema<Self>,
                $crate::DeclarationError,
            > {
                static SCHEMA: ::std::sync::OnceLock<
                    ::std::result::Result<$crate::ProjectionSchema<$ty>, $crate::DeclarationError>,
                > = ::std::sync::OnceLock::new();

                SCHEMA
                    .get_or_init(|| {
                        let parent = <$parent as $crate::Projectable>::projection_schema()?;
                        ::std::result::Result::Ok(
                            $crate::ProjectionSchema::<$ty>::builder()
                                .named(stringify!($ty))
                                .inherit(parent, $lens)
                                .declare($crate::field_specs!($ty; $($body)*))?
                                .build(),
                        )
                    })
                    .as_ref()
                    .map_err(::std::clone::Clone::clone)
            }
        }
    };
    ($ty:ty { $($body:tt)* }) => {
        impl $crate::Projectable for $ty {
            fn projection_schema() -> ::std::result::Result<
                &'static $crate::ProjectionSchema<Self>,
                $crate::DeclarationError,
            > {
                static SCHEMA: ::std::sync::OnceLock<
                    ::std::result::Result<$crate::ProjectionSchema<$ty>, $crate::DeclarationError>,
                > = ::std::sync::OnceLock::new();

                SCHEMA
                    .get_or_init(|| {
                        ::std::result::Result::Ok(
                            $crate::ProjectionSchema::<$ty>::builder()
                                .named(stringify!($ty))
                                .declare($crate::field_specs!($ty; $($body)*))?
                                .build(),
                        )
                    })
                    .as_ref()
                    .map_err(::std::clone::Clone::clone)
            }
        }
    };
}
