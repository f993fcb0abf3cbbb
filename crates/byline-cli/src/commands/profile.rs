//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs, ProfileSetArgs};
use crate::config::{Config, EngineKind, EngineProfile};
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the profile command.
pub fn execute_profile(args: ProfileArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, name, formatter),
        ProfileAction::Set(args) => set_profile(config, args, formatter),
        ProfileAction::Delete { name } => delete_profile(config, name, formatter),
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    let mut names: Vec<&String> = config.profiles.keys().collect();
    names.sort();

    println!("Available profiles:");
    for name in names {
        let profile = &config.profiles[name];
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        println!("    Kind: {}", profile.kind);
        println!("    Target: {}", profile.target());
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    println!("  Kind: {}", profile.kind);
    match profile.kind {
        EngineKind::Command => {
            println!("  Program: {}", profile.program.as_deref().unwrap_or("<unset>"));
            if !profile.args.is_empty() {
                println!("  Args: {}", profile.args.join(" "));
            }
            if !profile.no_fallback_arg.is_empty() {
                println!("  No-fallback flag: {}", profile.no_fallback_arg);
            }
        }
        EngineKind::Http => {
            println!("  Endpoint: {}", profile.endpoint.as_deref().unwrap_or("<unset>"));
            println!("  Timeout: {}s", profile.timeout_secs);
        }
    }

    Ok(())
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save()?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
///
/// Options left unset keep their current value when the profile exists.
fn set_profile(config: &mut Config, args: ProfileSetArgs, formatter: &Formatter) -> Result<()> {
    let profile = merge_profile(config.profiles.get(&args.name), &args);
    profile.validate()?;

    let action = if config.profiles.contains_key(&args.name) {
        "Updated"
    } else {
        "Created"
    };

    config.set_profile(args.name.clone(), profile);
    config.save()?;

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, args.name))
    );

    Ok(())
}

fn merge_profile(existing: Option<&EngineProfile>, args: &ProfileSetArgs) -> EngineProfile {
    let kind = EngineKind::from(args.kind);
    let mut profile = match existing {
        Some(existing) if existing.kind == kind => existing.clone(),
        _ => match kind {
            EngineKind::Command => EngineProfile::command("", Vec::<String>::new()),
            EngineKind::Http => EngineProfile::http(""),
        },
    };

    if let Some(program) = &args.program {
        profile.program = Some(program.clone());
    }
    if !args.args.is_empty() {
        profile.args = args.args.clone();
    }
    if let Some(flag) = &args.no_fallback_arg {
        profile.no_fallback_arg = flag.clone();
    }
    if let Some(endpoint) = &args.endpoint {
        profile.endpoint = Some(endpoint.clone());
    }
    if let Some(timeout_secs) = args.timeout_secs {
        profile.timeout_secs = timeout_secs;
    }
    profile
}

/// Delete a profile.
fn delete_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        config.save()?;
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KindArg;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    fn temp_config(dir: &TempDir) -> Config {
        Config::load_from(&dir.path().join("config.toml")).unwrap()
    }

    fn set_args(name: &str, kind: KindArg) -> ProfileSetArgs {
        ProfileSetArgs {
            name: name.to_string(),
            kind,
            program: None,
            args: Vec::new(),
            no_fallback_arg: None,
            endpoint: None,
            timeout_secs: None,
        }
    }

    #[test]
    fn test_set_and_switch_profile() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Text, false);

        let args = ProfileSetArgs {
            endpoint: Some("http://localhost:8000/extract".to_string()),
            ..set_args("service", KindArg::Http)
        };
        set_profile(&mut config, args, &formatter).unwrap();
        assert!(config.profiles.contains_key("service"));

        switch_profile(&mut config, "service".to_string(), &formatter).unwrap();
        assert_eq!(config.active_profile, "service");

        let reloaded = temp_config(&dir);
        assert_eq!(reloaded.active_profile, "service");
    }

    #[test]
    fn test_set_keeps_unspecified_fields() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Text, false);

        let args = ProfileSetArgs {
            program: Some("/opt/extract".to_string()),
            ..set_args("default", KindArg::Command)
        };
        set_profile(&mut config, args, &formatter).unwrap();

        let profile = &config.profiles["default"];
        assert_eq!(profile.program.as_deref(), Some("/opt/extract"));
        assert_eq!(profile.args, vec!["--json", "--with-metadata"]);
    }

    #[test]
    fn test_set_incomplete_profile_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Text, false);

        let result = set_profile(&mut config, set_args("broken", KindArg::Http), &formatter);
        assert!(result.is_err());
        assert!(!config.profiles.contains_key("broken"));
    }

    #[test]
    fn test_delete_active_profile() {
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Text, false);

        let result = delete_profile(&mut config, "default".to_string(), &formatter);
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
    }
}
