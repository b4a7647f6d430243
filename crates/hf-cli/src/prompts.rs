//! Interactive prompts
//!
//! Uses dialoguer for terminal-based input, confirmation and selection.

use dialoguer::{Confirm, Input, MultiSelect, Password};
use hf_common::project::validate_project_name;

use crate::error::Result;

pub const PROJECT_NAME_HINT: &str =
    "Project name must be a valid npm package name (lowercase, no spaces)";

pub fn project_name() -> Result<String> {
    let name = Input::<String>::new()
        .with_prompt("What is your project named?")
        .default("my-hydrogen-store".to_string())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if validate_project_name(input) {
                Ok(())
            } else {
                Err(PROJECT_NAME_HINT)
            }
        })
        .interact_text()?;
    Ok(name)
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Which servers to configure, both pre-selected.
pub fn select_servers() -> Result<(bool, bool)> {
    let items = [
        "Shopify MCP (GraphQL, products, inventory)",
        "Hydrogen MCP (scaffolding, analysis)",
    ];
    let chosen = MultiSelect::new()
        .with_prompt("Which MCP servers would you like to configure? (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&[true, true])
        .interact()?;
    Ok((chosen.contains(&0), chosen.contains(&1)))
}

/// Shopify domains need at least one dot.
pub fn check_store_domain(domain: &str) -> std::result::Result<(), &'static str> {
    if domain.trim().contains('.') {
        Ok(())
    } else {
        Err("Please enter a valid Shopify domain")
    }
}

pub fn check_access_token(token: &str) -> std::result::Result<(), &'static str> {
    if token.len() >= 10 {
        Ok(())
    } else {
        Err("Please enter a valid access token")
    }
}

pub fn store_domain() -> Result<String> {
    let domain = Input::<String>::new()
        .with_prompt("Shopify store domain (e.g., my-store.myshopify.com)")
        .validate_with(|input: &String| check_store_domain(input))
        .interact_text()?;
    Ok(domain)
}

pub fn access_token() -> Result<String> {
    let token = Password::new()
        .with_prompt("Admin API access token")
        .validate_with(|input: &String| check_access_token(input))
        .interact()?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_domain_needs_a_dot() {
        assert!(check_store_domain("my-store.myshopify.com").is_ok());
        assert!(check_store_domain("shop.example").is_ok());
        assert!(check_store_domain("my-store").is_err());
    }

    #[test]
    fn access_token_minimum_length() {
        assert!(check_access_token("shpat_1234").is_ok());
        assert!(check_access_token("short").is_err());
        assert!(check_access_token("").is_err());
    }
}
