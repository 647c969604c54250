use serde_json::Value;

use crate::error::Result;
use crate::mask::mask;
use crate::validate::validate;

/// One-shot validation of a card number from the command line.
/// Exits 1 when the number is invalid so scripts can branch on the code.
pub fn run(number: &str, json_output: bool) -> Result<()> {
    let outcome = validate(&Value::String(number.to_string()));

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        eprintln!("cardwise: checking {}", mask(number));
        println!("valid:   {}", outcome.valid);
        println!("scheme:  {}", outcome.scheme);
        println!("message: {}", outcome.message);
    }

    if !outcome.valid {
        std::process::exit(1);
    }

    Ok(())
}
