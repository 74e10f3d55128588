/// Builds a [`ScriptTable`](crate::ScriptTable) from `key => value` pairs.
///
/// Keys accept anything with a [`TableKey`](crate::TableKey) conversion
/// (integer indices or string names); values accept anything with a
/// [`ScriptValue`](crate::ScriptValue) conversion, including a nested
/// `table!` invocation.
///
/// # Examples
///
/// ```rust
/// use matbridge::table;
///
/// let t = table! {
///     "name" => "Alice",
///     1 => "first",
///     2 => 3.5,
/// };
/// assert_eq!(t.len(), 3);
/// assert_eq!(t.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::ScriptTable::new()
    };

    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        let mut table = $crate::ScriptTable::new();
        $(
            table.insert(
                $crate::TableKey::from($key),
                $crate::ScriptValue::from($value),
            );
        )*
        table
    }};
}
