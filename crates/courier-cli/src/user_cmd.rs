//! `courier user` — assemble a user record through the builder.

use anyhow::Result;
use colored::Colorize;

use courier_core::user::User;

/// Optional fields as given on the command line.
pub struct UserArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
}

/// Feed whichever fields were given into the builder, in any order.
pub fn build_user(args: UserArgs) -> User {
    let mut builder = User::builder();
    if let Some(name) = args.name {
        builder = builder.name(name);
    }
    if let Some(email) = args.email {
        builder = builder.email(email);
    }
    if let Some(password) = args.password {
        builder = builder.password(password);
    }
    if let Some(bio) = args.bio {
        builder = builder.bio(bio);
    }
    builder.build()
}

/// `courier user`
pub fn run(args: UserArgs, json: bool) -> Result<()> {
    let user = build_user(args);

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!();
    println!("{}", "  User".cyan().bold());
    println!("  {:<10} {}", "Name:".bold(), user.name());
    println!("  {:<10} {}", "Email:".bold(), user.email());
    if let Some(bio) = user.bio() {
        println!("  {:<10} {}", "Bio:".bold(), bio);
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_user_with_all_fields() {
        let user = build_user(UserArgs {
            name: Some("Sarinha".into()),
            email: Some("sarinha@example.com".into()),
            password: Some("outraSenha456".into()),
            bio: Some("Desenvolvedora".into()),
        });
        assert_eq!(user.name(), "Sarinha");
        assert_eq!(user.bio(), Some("Desenvolvedora"));
    }

    #[test]
    fn build_user_missing_fields_default() {
        let user = build_user(UserArgs {
            name: None,
            email: Some("x@example.com".into()),
            password: None,
            bio: None,
        });
        assert_eq!(user.name(), "");
        assert_eq!(user.password(), "");
        assert!(user.bio().is_none());
    }
}
