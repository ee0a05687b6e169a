//! Credentials for the basic-auth gate
//!
//! Users live in an ini-style file, one `user = password` per line.

use crate::error::{SlipboxError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

const DEFAULT_USER: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin";

/// Known users and their passwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTable {
    users: BTreeMap<String, String>,
}

impl Default for UserTable {
    fn default() -> Self {
        let mut users = BTreeMap::new();
        users.insert(DEFAULT_USER.to_string(), DEFAULT_PASSWORD.to_string());
        UserTable { users }
    }
}

impl UserTable {
    /// Parse the users file. An empty table falls back to admin/admin.
    pub fn parse(raw: &str) -> Self {
        let mut users = BTreeMap::new();

        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            let Some(eq) = line.find('=') else {
                continue;
            };
            if eq == 0 {
                continue;
            }
            let key = line[..eq].trim();
            let value = unquote(line[eq + 1..].trim());
            users.insert(key.to_string(), value.to_string());
        }

        if users.is_empty() {
            UserTable::default()
        } else {
            UserTable { users }
        }
    }

    /// Load the users file; a missing file means default credentials
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(Self::parse(&raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(UserTable::default()),
            Err(e) => Err(SlipboxError::Io(e)),
        }
    }

    /// Check a username/password pair. Users with an empty password cannot
    /// log in.
    pub fn verify(&self, user: &str, password: &str) -> bool {
        match self.users.get(user) {
            Some(expected) => !expected.is_empty() && expected == password,
            None => false,
        }
    }

    /// Whether only the built-in admin/admin account exists
    pub fn is_default(&self) -> bool {
        *self == UserTable::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
