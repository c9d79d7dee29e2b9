use liftlog_domain::WeightUnit;
use log::error;

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, String>;
    fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
    fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "WeightUnitDef")]
    pub weight_unit: WeightUnit,
    pub theme: Theme,
}

impl Settings {
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        match self.theme {
            Theme::System => {
                if let Some(window) = web_sys::window() {
                    if let Ok(prefers_dark_scheme) =
                        window.match_media("(prefers-color-scheme: dark)")
                    {
                        if let Some(media_query_list) = prefers_dark_scheme {
                            if media_query_list.matches() {
                                Theme::Dark
                            } else {
                                Theme::Light
                            }
                        } else {
                            error!("failed to determine preferred color scheme");
                            Theme::Light
                        }
                    } else {
                        error!("failed to match media to determine preferred color scheme");
                        Theme::Light
                    }
                } else {
                    error!("failed to access window to determine preferred color scheme");
                    Theme::Light
                }
            }
            Theme::Light | Theme::Dark => self.theme,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Lbs,
            theme: Theme::Light,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    System,
    Light,
    Dark,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(remote = "WeightUnit")]
enum WeightUnitDef {
    Lbs,
    Kg,
}
