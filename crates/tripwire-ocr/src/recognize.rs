use anyhow::Result;
use image::RgbaImage;
use tesseract::Tesseract;
use tripwire_core::{TextRecognizer, WatchError};

const MAX_PAGE_SEG_MODE: u8 = 13;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecognitionModeError {
    #[error("`{0}` expects a value")]
    MissingValue(String),

    #[error("invalid page segmentation mode `{0}`")]
    InvalidPageSegMode(String),

    #[error("invalid variable assignment `{0}`, expected name=value")]
    BadVariable(String),
}

/// Parsed tesseract-CLI-style recognition mode (`--psm 4 -c name=value`)
#[derive(Debug, Default, PartialEq)]
pub struct RecognitionMode {
    pub page_seg_mode: Option<String>,
    pub variables: Vec<(String, String)>,
}

impl RecognitionMode {
    pub fn parse(input: &str) -> Result<Self, RecognitionModeError> {
        let mut mode = Self::default();
        let mut tokens = input.split_whitespace();

        while let Some(token) = tokens.next() {
            if let Some(value) = token.strip_prefix("--psm=") {
                mode.page_seg_mode = Some(parse_psm(value)?);
                continue;
            }

            match token {
                "--psm" => {
                    let value = tokens
                        .next()
                        .ok_or_else(|| RecognitionModeError::MissingValue(token.into()))?;
                    mode.page_seg_mode = Some(parse_psm(value)?);
                }
                "-c" => {
                    let assignment = tokens
                        .next()
                        .ok_or_else(|| RecognitionModeError::MissingValue(token.into()))?;
                    let (name, value) = assignment
                        .split_once('=')
                        .filter(|(name, _)| !name.is_empty())
                        .ok_or_else(|| RecognitionModeError::BadVariable(assignment.into()))?;
                    mode.variables.push((name.to_string(), value.to_string()));
                }
                other => {
                    tracing::warn!("Ignoring unsupported recognition option `{other}`");
                }
            }
        }

        Ok(mode)
    }
}

fn parse_psm(value: &str) -> Result<String, RecognitionModeError> {
    match value.parse::<u8>() {
        Ok(n) if n <= MAX_PAGE_SEG_MODE => Ok(n.to_string()),
        _ => Err(RecognitionModeError::InvalidPageSegMode(value.into())),
    }
}

/// libtesseract backed recognizer, one engine instance per call
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    language: String,
    datapath: Option<String>,
}

impl TesseractRecognizer {
    pub fn new(language: impl Into<String>, datapath: Option<String>) -> Self {
        Self {
            language: language.into(),
            datapath,
        }
    }

    pub fn recognize_text(&self, image: &RgbaImage, mode: &str) -> Result<String> {
        let mode = RecognitionMode::parse(mode)?;

        let mut engine = Tesseract::new(self.datapath.as_deref(), Some(&self.language))?;
        if let Some(psm) = &mode.page_seg_mode {
            engine = engine.set_variable("tessedit_pageseg_mode", psm)?;
        }
        for (name, value) in &mode.variables {
            engine = engine.set_variable(name, value)?;
        }

        let (width, height) = image.dimensions();
        let text = engine
            .set_frame(
                image.as_raw(),
                width as i32,
                height as i32,
                4,
                4 * width as i32,
            )?
            .recognize()?
            .get_text()?;

        Ok(text)
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &RgbaImage, mode: &str) -> Result<String, WatchError> {
        self.recognize_text(image, mode)
            .map_err(|e| WatchError::Recognition(format!("{e:#}")))
    }
}
