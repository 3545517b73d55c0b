//! Macros for declaring well-known GUIDs.

/// Declares a well-known GUID as a lazily parsed static.
///
/// The text is parsed with [`Guid::must_parse`](crate::Guid::must_parse) on
/// first access, so a malformed literal panics there. Use this only for
/// GUIDs fixed in source.
///
/// # Example
///
/// ```
/// winguid::define_guid!(
///     /// The root COM interface.
///     IID_IUNKNOWN, "{00000000-0000-0000-C000-000000000046}"
/// );
///
/// assert_eq!(IID_IUNKNOWN.to_string(), "{00000000-0000-0000-c000-000000000046}");
/// ```
#[macro_export]
macro_rules! define_guid {
    ($(#[$meta:meta])* $name:ident, $text:literal) => {
        $(#[$meta])*
        pub static $name: ::std::sync::LazyLock<$crate::Guid> =
            ::std::sync::LazyLock::new(|| $crate::Guid::must_parse($text));
    };
}
