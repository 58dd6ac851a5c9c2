use anyhow::{Error, Result};

use super::console::Console;

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Print `options` as a 1-based numbered list under `heading`.
pub(crate) fn show_numbered(console: &mut dyn Console, heading: &str, options: &[String]) -> Result<()> {
    console.line("")?;
    console.line(heading)?;
    for (index, option) in options.iter().enumerate() {
        console.line(&format!("  {}. {option}", index + 1))?;
    }
    Ok(())
}

/// Ask for a 1-based position in a list of `count` entries and return it as
/// a 0-based index. `default` is 0-based as well.
pub(crate) fn select_index(
    console: &mut dyn Console,
    label: &str,
    count: usize,
    default: Option<usize>,
) -> Result<usize> {
    let picked = console.choose(
        label,
        1..=count as i64,
        default.map(|index| index as i64 + 1),
    )?;
    Ok(picked.saturating_sub(1) as usize)
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};

    use super::*;

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = Err::<(), _>(anyhow!("UNIQUE constraint failed: categories.name"))
            .context("failed to insert category")
            .unwrap_err();
        assert_eq!(
            surface_error(&err),
            "UNIQUE constraint failed: categories.name"
        );
    }
}
