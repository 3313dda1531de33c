// src/specs/medallium.rs
//
// The medallium list page: one table per tribe section, class "main roundy",
// first row a header. Rows map to records by fixed cell positions; which
// cell holds the tribe icon, and which category a record gets, depend only
// on the table's position on the page (see layout_for).

use std::fmt;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::{image_slug, normalize_ws};
use crate::data::{Names, Rank, Tribe, Yokai, YokaiType};
use crate::params::{
    BOSS_TABLE, BOSS_TRIBE_CELL, GAME_ID, ID_CELL, IMAGE_DIR, IMAGE_EXT, LEGENDARY_TABLE,
    NAME_CELL, RANK_CELL, TRIBE_CELL, YOKAI_TABLE_SELECTOR,
};

// Selector strings are compile-time constants; parse cannot fail on them.
static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse(YOKAI_TABLE_SELECTOR).unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static ICON: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// Where a table's tribe icon sits and what category its rows get.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    pub category: YokaiType,
    pub tribe_cell: usize,
}

/// Positional layout table, 1-indexed by table occurrence order.
/// The page's section ordering is load-bearing here; keep every
/// positional assumption in this one function.
pub fn layout_for(table_index: usize) -> TableLayout {
    match table_index {
        LEGENDARY_TABLE => TableLayout { category: YokaiType::Legendary, tribe_cell: TRIBE_CELL },
        BOSS_TABLE => TableLayout { category: YokaiType::Boss, tribe_cell: BOSS_TRIBE_CELL },
        _ => TableLayout { category: YokaiType::Regular, tribe_cell: TRIBE_CELL },
    }
}

/// Why a row produced no record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The identifier cell is not a number: section dividers and other
    /// non-data rows. Expected, filtered silently.
    NoMedalliumNumber,
    /// A positional cell the layout requires is absent.
    MissingCell(usize),
}

impl SkipReason {
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::NoMedalliumNumber)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMedalliumNumber => write!(f, "no medallium number"),
            Self::MissingCell(i) => write!(f, "missing cell {i}"),
        }
    }
}

/// Outcome of normalizing one row: a record, or a first-class skip.
/// No partial record ever leaves this module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    Record(Yokai),
    Skip(SkipReason),
}

/// All data rows of all medallium tables, as a lazy `(table_index, row)`
/// sequence. Tables are 1-indexed in document order; each table's first
/// row (the header) is dropped. No matching tables → empty sequence.
pub fn walk_tables<'a>(doc: &'a Html) -> impl Iterator<Item = (usize, ElementRef<'a>)> + 'a {
    doc.select(&TABLE).enumerate().flat_map(|(i, table)| {
        table.select(&ROW).skip(1).map(move |row| (i + 1, row))
    })
}

/// Map one data row to a record, or say why not.
pub fn normalize_row(table_index: usize, row: ElementRef) -> RowOutcome {
    let cells: Vec<ElementRef> = row.select(&CELL).collect();
    let layout = layout_for(table_index);

    let Some(id_cell) = cells.get(ID_CELL) else {
        return RowOutcome::Skip(SkipReason::MissingCell(ID_CELL));
    };
    let Some(id) = parse_medallium_no(&cell_text(*id_cell)) else {
        return RowOutcome::Skip(SkipReason::NoMedalliumNumber);
    };

    let Some(name_cell) = cells.get(NAME_CELL) else {
        return RowOutcome::Skip(SkipReason::MissingCell(NAME_CELL));
    };
    // An empty name is allowed; it just degrades the image path.
    let name = extract_name(*name_cell);

    let Some(rank_cell) = cells.get(RANK_CELL) else {
        return RowOutcome::Skip(SkipReason::MissingCell(RANK_CELL));
    };
    let rank = match icon_alt(*rank_cell) {
        Some(alt) => Rank::from_icon_alt(alt),
        None => Rank::Unknown,
    };

    let Some(tribe_cell) = cells.get(layout.tribe_cell) else {
        return RowOutcome::Skip(SkipReason::MissingCell(layout.tribe_cell));
    };
    let tribe = match icon_alt(*tribe_cell) {
        Some(alt) => Tribe::from_icon_alt(alt),
        None => Tribe::Unknown,
    };

    RowOutcome::Record(Yokai {
        id,
        image: image_path(&name),
        tribe_id: tribe,
        rank_id: rank,
        yokai_type: layout.category,
        first_game_id: s!(GAME_ID),
        game_ids: vec![s!(GAME_ID)],
        names: Names::english(name),
    })
}

/// `"././assets/yokai/<slug>.png"` for a display name.
pub fn image_path(name: &str) -> String {
    format!("{IMAGE_DIR}{}{IMAGE_EXT}", image_slug(name))
}

/* ---------- helpers ---------- */

fn cell_text(cell: ElementRef) -> String {
    normalize_ws(&cell.text().collect::<String>())
}

/// Prefer the text of an embedded hyperlink; fall back to the cell's own
/// trimmed text.
fn extract_name(cell: ElementRef) -> String {
    match cell.select(&LINK).next() {
        Some(link) => normalize_ws(&link.text().collect::<String>()),
        None => cell_text(cell),
    }
}

fn icon_alt<'a>(cell: ElementRef<'a>) -> Option<&'a str> {
    cell.select(&ICON).next().and_then(|img| img.value().attr("alt"))
}

/// Medallium numbers are plain non-negative decimal; anything else
/// (em dash dividers, empty cells) is "not a data row".
fn parse_medallium_no(text: &str) -> Option<u32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yokai_table(data_rows: &str) -> String {
        format!(
            r#"<table class="main roundy">
                 <tr><th>No.</th><th>Image</th><th>Name</th><th>Rank</th><th>Tribe</th></tr>
                 {data_rows}
               </table>"#
        )
    }

    fn standard_row(no: &str, name_html: &str, rank_alt: &str, tribe_alt: &str) -> String {
        format!(
            r#"<tr><td>{no}</td><td><img src="medal.png"></td><td>{name_html}</td>
                 <td><img alt="{rank_alt}"></td><td><img alt="{tribe_alt}"></td></tr>"#
        )
    }

    // Boss tables have no rank column; the tribe icon sits one cell left.
    fn boss_row(no: &str, name_html: &str) -> String {
        format!(
            r#"<tr><td>{no}</td><td><img src="medal.png"></td><td>{name_html}</td>
                 <td><img alt="Boss medal"></td></tr>"#
        )
    }

    fn record(outcome: RowOutcome) -> Yokai {
        match outcome {
            RowOutcome::Record(y) => y,
            RowOutcome::Skip(r) => panic!("expected record, got skip: {r}"),
        }
    }

    #[test]
    fn walker_is_one_indexed_and_skips_headers() {
        let html = format!(
            "{}{}",
            yokai_table(&standard_row("1", "Pandle", "Rank E icon", "Brave Tribe")),
            yokai_table(&standard_row("26", "Dismarelda", "Rank D icon", "Eerie Tribe")),
        );
        let doc = Html::parse_document(&html);
        let items: Vec<usize> = walk_tables(&doc).map(|(i, _)| i).collect();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn walker_yields_nothing_without_matching_tables() {
        let doc = Html::parse_document(
            r#"<p>no tables here</p><table class="infobox"><tr><td>1</td></tr></table>"#,
        );
        assert_eq!(walk_tables(&doc).count(), 0);
    }

    #[test]
    fn divider_row_is_a_silent_skip() {
        for id in ["—", "", "No. 5"] {
            let html = yokai_table(&standard_row(id, "Pandle", "Rank E icon", "Brave Tribe"));
            let doc = Html::parse_document(&html);
            let (idx, row) = walk_tables(&doc).next().unwrap();
            let outcome = normalize_row(idx, row);
            assert_eq!(outcome, RowOutcome::Skip(SkipReason::NoMedalliumNumber), "{id:?}");
            assert!(matches!(&outcome, RowOutcome::Skip(r) if r.is_divider()));
        }
    }

    #[test]
    fn link_text_beats_cell_text() {
        let name_html = r#"<a href="/wiki/Whisper">Whisper</a> (butler)"#;
        let html = yokai_table(&standard_row("20", name_html, "Rank C icon", "Slippery Tribe"));
        let doc = Html::parse_document(&html);
        let (idx, row) = walk_tables(&doc).next().unwrap();
        let y = record(normalize_row(idx, row));
        assert_eq!(y.names.en.display, "Whisper");
        assert_eq!(y.image, "././assets/yokai/whisper.png");
    }

    #[test]
    fn plain_cell_text_when_no_link() {
        let html = yokai_table(&standard_row("33", "  Walkappa \n ", "Rank C icon", "Charming Tribe"));
        let doc = Html::parse_document(&html);
        let (idx, row) = walk_tables(&doc).next().unwrap();
        let y = record(normalize_row(idx, row));
        assert_eq!(y.names.en.display, "Walkappa");
    }

    #[test]
    fn row_fields_are_normalized() {
        let html = yokai_table(&standard_row("12", "Tanbo", "Rank A icon", "Mysterious Tribe"));
        let doc = Html::parse_document(&html);
        let (idx, row) = walk_tables(&doc).next().unwrap();
        let y = record(normalize_row(idx, row));
        assert_eq!(y.id, 12);
        assert_eq!(y.rank_id, Rank::A);
        assert_eq!(y.tribe_id, Tribe::Mysterious);
        assert_eq!(y.yokai_type, YokaiType::Regular);
        assert_eq!(y.first_game_id, "ykw1");
        assert_eq!(y.game_ids, vec![s!("ykw1")]);
    }

    #[test]
    fn missing_icons_become_unknown() {
        let row = r#"<tr><td>7</td><td></td><td>Buhu</td><td>E</td><td>no icon</td></tr>"#;
        let html = yokai_table(row);
        let doc = Html::parse_document(&html);
        let (idx, row) = walk_tables(&doc).next().unwrap();
        let y = record(normalize_row(idx, row));
        assert_eq!(y.rank_id, Rank::Unknown);
        assert_eq!(y.tribe_id, Tribe::Unknown);
    }

    #[test]
    fn short_row_is_skipped_with_the_missing_cell() {
        let html = yokai_table(r#"<tr><td>3</td><td>only two cells</td></tr>"#);
        let doc = Html::parse_document(&html);
        let (idx, row) = walk_tables(&doc).next().unwrap();
        assert_eq!(
            normalize_row(idx, row),
            RowOutcome::Skip(SkipReason::MissingCell(NAME_CELL)),
        );
    }

    #[test]
    fn layout_table_is_explicit() {
        assert_eq!(
            layout_for(LEGENDARY_TABLE),
            TableLayout { category: YokaiType::Legendary, tribe_cell: TRIBE_CELL },
        );
        assert_eq!(
            layout_for(BOSS_TABLE),
            TableLayout { category: YokaiType::Boss, tribe_cell: BOSS_TRIBE_CELL },
        );
        for other in [1, 2, 8, 10, 12] {
            assert_eq!(
                layout_for(other),
                TableLayout { category: YokaiType::Regular, tribe_cell: TRIBE_CELL },
            );
        }
    }

    #[test]
    fn boss_table_reads_tribe_from_the_shifted_cell() {
        let filler = yokai_table(&standard_row("1", "Pandle", "Rank E icon", "Brave Tribe"));
        let mut html = filler.repeat(BOSS_TABLE - 1);
        html.push_str(&yokai_table(&boss_row("201", r#"<a href="/wiki/SV_Snaggly">SV Snaggly</a>"#)));

        let doc = Html::parse_document(&html);
        let (idx, row) = walk_tables(&doc)
            .find(|(i, _)| *i == BOSS_TABLE)
            .expect("boss table present");
        let y = record(normalize_row(idx, row));
        assert_eq!(y.yokai_type, YokaiType::Boss);
        assert_eq!(y.tribe_id, Tribe::Boss);
        // Cell 3 is the tribe icon here, so the rank lookup finds no match.
        assert_eq!(y.rank_id, Rank::Unknown);
    }

    #[test]
    fn legendary_table_category_comes_from_position_alone() {
        let filler = yokai_table(&standard_row("1", "Pandle", "Rank E icon", "Brave Tribe"));
        let mut html = filler.repeat(LEGENDARY_TABLE - 1);
        html.push_str(&yokai_table(&standard_row(
            "60", "Shogunyan", "Rank S icon", "Brave Tribe",
        )));

        let doc = Html::parse_document(&html);
        let (idx, row) = walk_tables(&doc)
            .find(|(i, _)| *i == LEGENDARY_TABLE)
            .expect("legendary table present");
        let y = record(normalize_row(idx, row));
        assert_eq!(y.yokai_type, YokaiType::Legendary);
        assert_eq!(y.tribe_id, Tribe::Brave);
        assert_eq!(y.rank_id, Rank::S);
    }

    #[test]
    fn image_path_transform() {
        assert_eq!(image_path("Dr. Maddiman"), "././assets/yokai/dr_maddiman.png");
        assert_eq!(image_path("Robonyan F"), "././assets/yokai/robonyan_f.png");
        assert_eq!(image_path(""), "././assets/yokai/.png");
    }
}
