use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub catalog: CatalogConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub rust_log: String,
    pub color: bool,
}

// Стартовый каталог сеансов
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub seats_per_screening: u32,
    #[serde(default)]
    pub seat_capacity: Option<usize>,
    #[serde(default = "default_screenings")]
    pub screenings: Vec<ScreeningConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningConfig {
    pub title: String,
    // "HH:MM", разбирается в TimeOfDay при заполнении каталога
    pub starts_at: String,
}

impl Config {
    /// Значения по умолчанию, затем `config/default`, `config/<CINEMA_ENV>`
    /// и переменные окружения вида `CINEMA__CATALOG__SEATS_PER_SCREENING`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let environment = env::var("CINEMA_ENV").unwrap_or_else(|_| "development".to_string());

        config::Config::builder()
            .set_default("app.name", "SM Cinema Legazpi")?
            .set_default("app.rust_log", "cinema_booking=info")?
            .set_default("app.color", true)?
            .set_default("catalog.seats_per_screening", 10)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{environment}")).required(false))
            .add_source(
                config::Environment::with_prefix("CINEMA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seats_per_screening: 10,
            seat_capacity: None,
            screenings: default_screenings(),
        }
    }
}

fn default_screenings() -> Vec<ScreeningConfig> {
    [
        ("Hello, Love, Again", "13:00"),
        ("Moana 2", "14:30"),
        ("The Wicked", "17:00"),
    ]
    .into_iter()
    .map(|(title, starts_at)| ScreeningConfig {
        title: title.to_string(),
        starts_at: starts_at.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_box_office_lineup() {
        let catalog = CatalogConfig::default();
        let titles: Vec<&str> = catalog.screenings.iter().map(|s| s.title.as_str()).collect();

        assert_eq!(titles, vec!["Hello, Love, Again", "Moana 2", "The Wicked"]);
        assert_eq!(catalog.seats_per_screening, 10);
        assert!(catalog.seat_capacity.is_none());
    }

    // Единственный тест, который трогает переменные CINEMA*
    #[test]
    fn environment_overrides_file_and_defaults() {
        env::set_var("CINEMA_ENV", "test");
        env::set_var("CINEMA__CATALOG__SEATS_PER_SCREENING", "20");
        env::set_var("CINEMA__CATALOG__SEAT_CAPACITY", "15");
        env::set_var("CINEMA__APP__COLOR", "false");
        env::set_var("CINEMA__APP__NAME", "Night Owl Cinema");

        let loaded = Config::load();

        for key in [
            "CINEMA_ENV",
            "CINEMA__CATALOG__SEATS_PER_SCREENING",
            "CINEMA__CATALOG__SEAT_CAPACITY",
            "CINEMA__APP__COLOR",
            "CINEMA__APP__NAME",
        ] {
            env::remove_var(key);
        }

        let config = loaded.unwrap();
        assert_eq!(config.catalog.seats_per_screening, 20);
        assert_eq!(config.catalog.seat_capacity, Some(15));
        assert!(!config.app.color);
        assert_eq!(config.app.name, "Night Owl Cinema");
        // Значения, которые никто не переопределял
        assert_eq!(config.app.rust_log, "cinema_booking=info");
        assert_eq!(config.catalog.screenings.len(), 3);
    }
}
