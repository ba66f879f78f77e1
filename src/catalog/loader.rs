use std::fs;
use std::path::Path;

use strsim::jaro_winkler;

use crate::catalog::FoodCatalog;
use crate::error::{DietError, Result};
use crate::models::{FoodGroup, FoodItem};

/// Minimum Jaro-Winkler similarity for a fuzzy header match.
const HEADER_MATCH_THRESHOLD: f64 = 0.92;

/// Canonical catalog fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Preparation,
    Group,
    Energy,
    Vegetarian,
    Vegan,
    GlutenFree,
    DiabetesSafe,
    LowSodium,
    ContainsLactose,
    ContainsEgg,
    ContainsNuts,
}

impl Column {
    const ALL: [Column; 12] = [
        Column::Name,
        Column::Preparation,
        Column::Group,
        Column::Energy,
        Column::Vegetarian,
        Column::Vegan,
        Column::GlutenFree,
        Column::DiabetesSafe,
        Column::LowSodium,
        Column::ContainsLactose,
        Column::ContainsEgg,
        Column::ContainsNuts,
    ];

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::Name => &["name", "food", "nome", "alimento", "descricao"],
            Column::Preparation => &["preparation", "preparo", "preparacao"],
            Column::Group => &["group", "food_group", "grupo", "categoria", "category"],
            Column::Energy => &[
                "energy_kcal_per_100g",
                "energy_kcal",
                "kcal_per_100g",
                "kcal",
                "energy",
                "energia",
                "energia_kcal",
                "calorias",
                "calories",
            ],
            Column::Vegetarian => &["is_vegetarian", "vegetarian", "vegetariano"],
            Column::Vegan => &["is_vegan", "vegan", "vegano"],
            Column::GlutenFree => &["is_gluten_free", "gluten_free", "sem_gluten"],
            Column::DiabetesSafe => &[
                "is_ok_for_diabetes",
                "diabetes_safe",
                "ok_for_diabetes",
                "diabetico",
            ],
            Column::LowSodium => &["is_low_sodium", "low_sodium", "baixo_sodio"],
            Column::ContainsLactose => &["contains_lactose", "lactose", "contem_lactose"],
            Column::ContainsEgg => &["contains_egg", "egg", "ovo", "contem_ovo"],
            Column::ContainsNuts => &["contains_nuts", "nuts", "castanhas", "contem_castanhas"],
        }
    }

    fn is_required(&self) -> bool {
        matches!(self, Column::Name | Column::Group | Column::Energy)
    }
}

/// Header index for every canonical column found.
#[derive(Debug, Default)]
struct ColumnMap {
    indices: Vec<(Column, usize)>,
}

impl ColumnMap {
    fn get(&self, column: Column) -> Option<usize> {
        self.indices
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, idx)| *idx)
    }
}

/// Lowercase, strip accents and collapse separators to `_`.
fn normalize_header(header: &str) -> String {
    header
        .trim()
        .trim_start_matches('\u{feff}')
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            ' ' | '-' | '/' | '.' => '_',
            other => other,
        })
        .collect()
}

/// Map raw headers to canonical columns: exact alias first, then fuzzy.
fn resolve_columns(headers: &[String]) -> Result<ColumnMap> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let mut map = ColumnMap::default();
    let mut used = vec![false; normalized.len()];

    for column in Column::ALL {
        let exact = column.aliases().iter().find_map(|alias| {
            normalized
                .iter()
                .enumerate()
                .find(|(i, h)| !used[*i] && h.as_str() == *alias)
                .map(|(i, _)| i)
        });
        if let Some(idx) = exact {
            used[idx] = true;
            map.indices.push((column, idx));
        }
    }

    for column in Column::ALL {
        if map.get(column).is_some() {
            continue;
        }
        let best = normalized
            .iter()
            .enumerate()
            .filter(|(i, _)| !used[*i])
            .flat_map(|(i, h)| {
                column
                    .aliases()
                    .iter()
                    .map(move |alias| (i, jaro_winkler(h, alias)))
            })
            .filter(|(_, score)| *score >= HEADER_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((idx, score)) = best {
            tracing::debug!(
                "Matched header '{}' to {:?} (similarity {:.2})",
                headers[idx],
                column,
                score
            );
            used[idx] = true;
            map.indices.push((column, idx));
        }
    }

    let missing: Vec<&str> = Column::ALL
        .iter()
        .filter(|c| c.is_required() && map.get(**c).is_none())
        .map(|c| c.aliases()[0])
        .collect();

    if !missing.is_empty() {
        return Err(DietError::InvalidCatalog(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    Ok(map)
}

/// Parse a number, accepting a decimal comma and `.` thousands separators
/// (`1.234,5`). Blank or malformed cells are `None`.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let normalized = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else {
        raw.to_string()
    };
    normalized.parse().ok()
}

/// Energy cell of one row; unusable values become `0.0` and drop the row
/// out of portion math.
fn parse_energy(raw: &str, name: &str) -> f64 {
    match parse_number(raw) {
        Some(kcal) => kcal,
        None => {
            if !raw.trim().is_empty() {
                tracing::warn!(
                    "Unparseable energy '{}' for food '{}', treating as 0 kcal",
                    raw.trim(),
                    name
                );
            }
            0.0
        }
    }
}

/// Parse a boolean tag; blank or unrecognized cells keep `default`.
fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "sim" | "s" | "x" => true,
        "0" | "false" | "no" | "n" | "nao" | "não" => false,
        _ => default,
    }
}

/// Pick `;` when the header line has more semicolons than commas.
fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or_default();
    if header.matches(';').count() > header.matches(',').count() {
        b';'
    } else {
        b','
    }
}

/// Parse CSV text into a catalog.
pub fn parse_catalog_csv(content: &str) -> Result<FoodCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(content))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let columns = resolve_columns(&headers)?;

    let cell = |record: &csv::StringRecord, column: Column| -> Option<String> {
        columns
            .get(column)
            .and_then(|idx| record.get(idx))
            .map(str::to_string)
    };
    let flag = |record: &csv::StringRecord, column: Column, default: bool| -> bool {
        cell(record, column)
            .map(|v| parse_flag(&v, default))
            .unwrap_or(default)
    };

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = cell(&record, Column::Name).unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        let kcal_per_100g =
            parse_energy(&cell(&record, Column::Energy).unwrap_or_default(), &name);

        items.push(FoodItem {
            name,
            preparation: cell(&record, Column::Preparation).unwrap_or_default(),
            group: FoodGroup::from_label(&cell(&record, Column::Group).unwrap_or_default()),
            kcal_per_100g,
            vegetarian: flag(&record, Column::Vegetarian, true),
            vegan: flag(&record, Column::Vegan, true),
            gluten_free: flag(&record, Column::GlutenFree, true),
            diabetes_safe: flag(&record, Column::DiabetesSafe, true),
            low_sodium: flag(&record, Column::LowSodium, true),
            contains_lactose: flag(&record, Column::ContainsLactose, false),
            contains_egg: flag(&record, Column::ContainsEgg, false),
            contains_nuts: flag(&record, Column::ContainsNuts, false),
        });
    }

    let catalog = FoodCatalog::new(items);
    catalog.validate()?;
    Ok(catalog)
}

/// Load a catalog from a `.json` array of food rows or a CSV table.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let catalog = if is_json {
        let items: Vec<FoodItem> = serde_json::from_str(&content)?;
        let catalog = FoodCatalog::new(items);
        catalog.validate()?;
        catalog
    } else {
        parse_catalog_csv(&content)?
    };

    tracing::info!("Loaded {} food rows from {}", catalog.len(), path.display());
    Ok(catalog)
}
