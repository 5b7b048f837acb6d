pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Fails with `InvalidArgument` naming `name` unless `predicate` holds.
///
/// `condition` is the source text of the predicate, reported as the
/// requirement the argument did not meet.
#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(unmet_requirement(name, condition))
    }
}

#[cold]
fn unmet_requirement(name: &str, condition: &str) -> crate::error::Error {
    crate::error::Error::invalid_arg(name, format!("requires `{condition}`"))
}
