use anyhow::Result;
use tripwire_config::settings_rows;
use tripwire_types::{AreaKind, CaptureRegion};

use crate::io::{clear_screen, prompt, render_table};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditChoice {
    Keywords,
    Response,
    ScanInterval,
    Token,
    ChannelId,
    CaseSensitivity,
    TargetUsername,
    AreaCoordinates,
    Back,
}

impl EditChoice {
    const ENTRIES: [(&'static str, &'static str, &'static str, EditChoice); 9] = [
        ("1", "Edit keywords", "Modify trigger keywords", EditChoice::Keywords),
        ("2", "Edit response message", "Change automatic response", EditChoice::Response),
        ("3", "Edit scan interval", "Adjust scanning frequency", EditChoice::ScanInterval),
        ("4", "Edit Discord token", "Update Discord authentication", EditChoice::Token),
        ("5", "Edit channel ID", "Change target Discord channel", EditChoice::ChannelId),
        ("6", "Toggle case sensitivity", "Switch case matching", EditChoice::CaseSensitivity),
        ("7", "Edit target username", "Set specific username to monitor", EditChoice::TargetUsername),
        ("8", "Edit area coordinates", "Enter a region numerically", EditChoice::AreaCoordinates),
        ("9", "Back to main menu", "Return to previous menu", EditChoice::Back),
    ];

    pub fn parse(input: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(key, ..)| *key == input.trim())
            .map(|(.., choice)| *choice)
    }

    fn table() -> String {
        let rows: Vec<Vec<String>> = Self::ENTRIES
            .iter()
            .map(|(key, action, description, _)| {
                vec![key.to_string(), action.to_string(), description.to_string()]
            })
            .collect();
        render_table(&["Option", "Action", "Description"], &rows)
    }
}

/// `left top width height`, comma or space separated, non-empty area
pub fn parse_region(input: &str) -> Option<CaptureRegion> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    let [left, top, width, height] = parts.as_slice() else {
        return None;
    };

    let region = CaptureRegion::new(
        left.parse().ok()?,
        top.parse().ok()?,
        width.parse().ok()?,
        height.parse().ok()?,
    );

    (!region.is_empty()).then_some(region)
}

pub fn edit_config(state: &mut AppState) -> Result<()> {
    clear_screen();
    println!("\nEdit Configuration");
    print!("{}", EditChoice::table());

    let Some(choice) = EditChoice::parse(&prompt("\nSelect option: ")?) else {
        println!("\nUnknown option");
        return Ok(());
    };

    match choice {
        EditChoice::Keywords => {
            println!("\nCurrent keywords: {}", state.config.keywords.join(", "));
            let input = prompt("Enter new keywords (comma-separated): ")?;
            state.update(|c| c.set_keywords_from_csv(&input))?;
        }
        EditChoice::Response => {
            println!("\nCurrent response: {}", state.config.response);
            let input = prompt("Enter new response: ")?;
            state.update(|c| c.response = input)?;
        }
        EditChoice::ScanInterval => {
            println!("\nCurrent scan interval: {}", state.config.scan_interval);
            let input = prompt("Enter new scan interval (in seconds): ")?;
            match input.parse::<f64>() {
                Ok(seconds) => {
                    if !state.update(|c| c.set_scan_interval(seconds))? {
                        println!("Interval must be greater than 0");
                        return Ok(());
                    }
                }
                Err(_) => {
                    println!("Invalid input. Please enter a number.");
                    return Ok(());
                }
            }
        }
        EditChoice::Token => {
            let input = prompt("Enter Discord token: ")?;
            state.update(|c| c.discord_token = input)?;
        }
        EditChoice::ChannelId => {
            let input = prompt("Enter channel ID: ")?;
            state.update(|c| c.channel_id = input)?;
        }
        EditChoice::CaseSensitivity => {
            let on = state.update(|c| c.toggle_case_sensitive())?;
            println!("\nCase sensitivity is now: {}", if on { "ON" } else { "OFF" });
        }
        EditChoice::TargetUsername => {
            let current = if state.config.target_username.is_empty() {
                "None"
            } else {
                state.config.target_username.as_str()
            };
            println!("\nCurrent target username: {current}");
            let input = prompt("Enter target username (or leave empty to disable): ")?;
            state.update(|c| c.target_username = input)?;
        }
        EditChoice::AreaCoordinates => {
            let kind = match prompt("\nArea to edit (1 = message, 2 = username): ")?.as_str() {
                "1" => AreaKind::Message,
                "2" => AreaKind::Username,
                _ => {
                    println!("Unknown area");
                    return Ok(());
                }
            };
            println!("Current {} area: {}", kind.label(), state.config.area(kind));
            let input = prompt("Enter left top width height: ")?;
            let Some(region) = parse_region(&input) else {
                println!("Invalid region. Expected four numbers with non-zero width and height.");
                return Ok(());
            };
            state.update(|c| c.set_area(kind, region))?;
        }
        EditChoice::Back => return Ok(()),
    }

    println!("\nConfiguration saved!");
    Ok(())
}

pub fn show_settings(state: &AppState) {
    let rows: Vec<Vec<String>> = settings_rows(&state.config)
        .into_iter()
        .map(|(name, value)| vec![name.to_string(), value])
        .collect();

    println!("\nCurrent configuration:");
    print!("{}", render_table(&["Setting", "Value"], &rows));
    println!("Stored at {}", state.store.path().display());
}
