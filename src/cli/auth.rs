use std::error::Error;
use std::io::{self, BufRead, Write};

use crate::core::credentials::CredentialStore;

/// Prompts for a translation key on stdin and stores it in the keyring.
pub fn interactive_auth(use_keyring: bool) -> Result<(), Box<dyn Error>> {
    print!("Translation API key: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let message = store_key(&CredentialStore::new(use_keyring), &input)?;
    println!("{message}");
    Ok(())
}

pub fn interactive_deauth(use_keyring: bool) -> Result<(), Box<dyn Error>> {
    let removed = CredentialStore::new(use_keyring).remove()?;
    if removed {
        println!("✅ Removed the stored translation key");
    } else {
        println!("No translation key was stored.");
    }
    Ok(())
}

fn store_key(store: &CredentialStore, input: &str) -> Result<String, Box<dyn Error>> {
    let key = input.trim();
    if key.is_empty() {
        return Err("no key entered".into());
    }
    store.store(key)?;
    Ok("✅ Translation key saved to the system keyring".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_are_refused_before_touching_the_keyring() {
        let store = CredentialStore::new(true);
        let err = store_key(&store, "  \n").unwrap_err();
        assert_eq!(err.to_string(), "no key entered");
    }

    #[test]
    fn disabled_keyring_reports_why() {
        let store = CredentialStore::new(false);
        let err = store_key(&store, "abc123\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the system keyring is disabled for this session"
        );
        assert!(interactive_deauth(false).is_err());
    }
}
