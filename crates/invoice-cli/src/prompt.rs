//! Interactive prompts for values missing from the command line.

use std::error::Error;

use dialoguer::Input;
use lightning_address::LightningAddress;

/// Ask for a Lightning Address until one parses.
pub fn lightning_address() -> Result<LightningAddress, Box<dyn Error>> {
    let input: String = Input::new()
        .with_prompt("Enter a Lightning Address (e.g., user@domain.com)")
        .validate_with(|input: &String| -> Result<(), String> {
            LightningAddress::parse(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(LightningAddress::parse(&input)?)
}

/// Ask for an amount in sats. An empty answer means "use the service minimum".
pub fn amount() -> Result<Option<u64>, Box<dyn Error>> {
    let input: String = Input::new()
        .with_prompt("Enter amount in sats (empty for the minimum)")
        .allow_empty(true)
        .validate_with(|input: &String| parse_amount(input).map(|_| ()))
        .interact_text()?;

    Ok(parse_amount(&input)?)
}

/// Parse a sats amount typed by the user. Underscores are allowed as separators.
pub fn parse_amount(input: &str) -> Result<Option<u64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .replace('_', "")
        .parse::<u64>()
        .map(Some)
        .map_err(|_| format!("'{}' is not a whole number of sats", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("21"), Ok(Some(21)));
        assert_eq!(parse_amount("  1_000 \n"), Ok(Some(1000)));
        assert_eq!(parse_amount(""), Ok(None));
        assert_eq!(parse_amount("   "), Ok(None));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("1.5").is_err());
        assert!(parse_amount("lots").is_err());
    }
}
