//! The `quizbox init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizbox.toml").exists() {
        println!("quizbox.toml already exists, skipping.");
    } else {
        std::fs::write("quizbox.toml", SAMPLE_CONFIG)?;
        println!("Created quizbox.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizbox.toml to set your name and option labels");
    println!("  2. Run: quizbox list");
    println!("  3. Run: quizbox play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbox configuration

# Name shown on the results screen. Blank means "Guest".
player_name = ""

# Labels of the two true/false options.
true_label = "True"
false_label = "False"

[server]
bind = "127.0.0.1"
port = 3000
assets_dir = "./public"
"#;
