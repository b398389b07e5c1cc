use anyhow::Result;
use tripwire_types::AreaKind;

use crate::calibrate::calibrate_area;
use crate::editor::{edit_config, show_settings};
use crate::io::{clear_screen, pause, prompt, render_table};
use crate::monitoring::{send_test_message, start_monitoring};
use crate::preview::{optimize_ocr, view_area};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartMonitoring,
    Calibrate(AreaKind),
    EditConfig,
    ViewSettings,
    SendTest,
    OptimizeOcr,
    ViewArea,
    Exit,
}

impl MenuChoice {
    const ENTRIES: [(&'static str, &'static str, &'static str, MenuChoice); 9] = [
        ("1", "Start monitoring", "Begin keyword detection", MenuChoice::StartMonitoring),
        ("2", "Calibrate message area", "Set message detection region", MenuChoice::Calibrate(AreaKind::Message)),
        ("3", "Calibrate username area", "Set username detection region", MenuChoice::Calibrate(AreaKind::Username)),
        ("4", "Edit configuration", "Modify settings", MenuChoice::EditConfig),
        ("5", "View current settings", "Display configuration", MenuChoice::ViewSettings),
        ("6", "Send test message", "Test Discord connection", MenuChoice::SendTest),
        ("7", "Optimize OCR settings", "Tune text recognition", MenuChoice::OptimizeOcr),
        ("8", "View/crop OCR area", "Inspect and trim a region", MenuChoice::ViewArea),
        ("9", "Exit", "Close the program", MenuChoice::Exit),
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

pub fn main_menu(state: &mut AppState) -> Result<()> {
    loop {
        clear_screen();
        println!("\nDiscord Keyword Monitor");
        print!("{}", MenuChoice::table());

        let input = prompt("\nSelect option: ")?;
        let Some(choice) = MenuChoice::parse(&input) else {
            println!("\nUnknown option '{input}'");
            pause()?;
            continue;
        };

        tracing::debug!("Menu choice: {choice:?}");

        match choice {
            MenuChoice::StartMonitoring => start_monitoring(state)?,
            MenuChoice::Calibrate(kind) => calibrate_area(state, kind)?,
            MenuChoice::EditConfig => edit_config(state)?,
            MenuChoice::ViewSettings => show_settings(state),
            MenuChoice::SendTest => send_test_message(state),
            MenuChoice::OptimizeOcr => optimize_ocr(state)?,
            MenuChoice::ViewArea => {
                if let Err(e) = view_area(state) {
                    tracing::error!("View area failed: {e:#}");
                    println!("\nError: {e:#}");
                }
            }
            MenuChoice::Exit => {
                println!("\nGoodbye!");
                return Ok(());
            }
        }

        pause()?;
    }
}
