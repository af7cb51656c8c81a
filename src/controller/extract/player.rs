use scraper::{ElementRef, Html};
use std::collections::BTreeMap;
use tracing::debug;

use super::rules::{FieldRule, MissingPolicy, Query, select_all, text_of};
use crate::error::ScrapeError;
use crate::model::{BattingStats, BowlingStats, FormatRanks, PlayerProfile, Rankings};

pub const PROFILE_CONTAINER: FieldRule = FieldRule::new(
    "profile container",
    Query::css("div#playerProfile"),
    0,
    MissingPolicy::Fail,
);
pub const PROFILE_HEADER: FieldRule = FieldRule::new(
    "profile header",
    Query::class("div", "cb-col cb-col-100 cb-bg-white"),
    0,
    MissingPolicy::Fail,
);
pub const NAME: FieldRule = FieldRule::new(
    "player name",
    Query::class("h1", "cb-font-40"),
    0,
    MissingPolicy::Fail,
);
pub const COUNTRY: FieldRule = FieldRule::new(
    "player country",
    Query::class("h3", "cb-font-18 text-gray"),
    0,
    MissingPolicy::Fail,
);
pub const IMAGE: FieldRule =
    FieldRule::new("player image", Query::css("img"), 0, MissingPolicy::Null);
pub const ROLE: FieldRule = FieldRule::new(
    "player role",
    Query::class("div", "cb-col cb-col-60 cb-lst-itm-sm"),
    2,
    MissingPolicy::Sentinel,
);

const RANK: Query = Query::class("div", "cb-col cb-col-25 cb-plyr-rank text-right");

const fn rank(name: &'static str, index: usize) -> FieldRule {
    FieldRule::new(name, RANK, index, MissingPolicy::Sentinel)
}

/// Ranks are a flat list on the page: batting test/odi/t20, then bowling.
pub const BATTING_RANKS: [FieldRule; 3] = [
    rank("batting test rank", 0),
    rank("batting odi rank", 1),
    rank("batting t20 rank", 2),
];
pub const BOWLING_RANKS: [FieldRule; 3] = [
    rank("bowling test rank", 3),
    rank("bowling odi rank", 4),
    rank("bowling t20 rank", 5),
];

pub const STATS_TABLES: Query = Query::class("div", "cb-plyr-tbl");
pub const TABLE_BODY: FieldRule =
    FieldRule::new("stats table body", Query::css("tbody"), 0, MissingPolicy::Fail);

/// Cell positions of the career summary tables.
#[derive(Debug, Clone, Copy)]
pub struct BattingColumns {
    pub min_columns: usize,
    pub matches: usize,
    pub runs: usize,
    pub highest_score: usize,
    pub average: usize,
    pub strike_rate: usize,
    pub hundreds: usize,
    pub fifties: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct BowlingColumns {
    pub min_columns: usize,
    pub balls: usize,
    pub runs: usize,
    pub wickets: usize,
    pub best_bowling_innings: usize,
    pub economy: usize,
    pub five_wickets: usize,
}

pub const BATTING_COLUMNS: BattingColumns = BattingColumns {
    min_columns: 13,
    matches: 1,
    runs: 3,
    highest_score: 5,
    average: 6,
    strike_rate: 7,
    hundreds: 12,
    fifties: 11,
};

pub const BOWLING_COLUMNS: BowlingColumns = BowlingColumns {
    min_columns: 12,
    balls: 3,
    runs: 4,
    wickets: 5,
    best_bowling_innings: 9,
    economy: 7,
    five_wickets: 11,
};

/// Builds a [`PlayerProfile`] from a Cricbuzz profile page.
///
/// # Errors
///
/// Will return `Err` if the profile container, its header, the name or the
/// country are missing, or a stats table has no body
pub fn extract_player(markup: &str) -> Result<PlayerProfile, ScrapeError> {
    let document = Html::parse_document(markup);
    let root = document.root_element();

    let profile = PROFILE_CONTAINER.require(root)?;
    let header = PROFILE_HEADER.require(profile)?;

    let name = NAME.text_or_sentinel(header)?;
    let country = COUNTRY.text_or_sentinel(header)?;
    let image = IMAGE.attr(header, "src")?;
    let role = ROLE.text_or_sentinel(root)?;

    let rankings = Rankings {
        batting: ranks(root, &BATTING_RANKS)?,
        bowling: ranks(root, &BOWLING_RANKS)?,
    };

    let (batting_stats, bowling_stats) = stats(root)?;
    debug!(
        name = %name,
        batting_formats = batting_stats.len(),
        bowling_formats = bowling_stats.len(),
        "extracted player profile"
    );

    Ok(PlayerProfile {
        name,
        country,
        image,
        role,
        rankings,
        batting_stats,
        bowling_stats,
    })
}

fn ranks(root: ElementRef<'_>, rules: &[FieldRule; 3]) -> Result<FormatRanks, ScrapeError> {
    let [test, odi, t20] = rules;
    Ok(FormatRanks {
        test: test.text_or_sentinel(root)?,
        odi: odi.text_or_sentinel(root)?,
        t20: t20.text_or_sentinel(root)?,
    })
}

type StatsTables = (BTreeMap<String, BattingStats>, BTreeMap<String, BowlingStats>);

/// Both tables or neither: a page with a single summary table yields no stats.
fn stats(root: ElementRef<'_>) -> Result<StatsTables, ScrapeError> {
    let tables = STATS_TABLES.all(root)?;
    let (Some(batting), Some(bowling)) = (tables.first(), tables.get(1)) else {
        return Ok((BTreeMap::new(), BTreeMap::new()));
    };

    let mut batting_stats = BTreeMap::new();
    for cells in rows(*batting, BATTING_COLUMNS.min_columns)? {
        let c = BATTING_COLUMNS;
        batting_stats.insert(
            cells[0].to_lowercase(),
            BattingStats {
                matches: cells[c.matches].clone(),
                runs: cells[c.runs].clone(),
                highest_score: cells[c.highest_score].clone(),
                average: cells[c.average].clone(),
                strike_rate: cells[c.strike_rate].clone(),
                hundreds: cells[c.hundreds].clone(),
                fifties: cells[c.fifties].clone(),
            },
        );
    }

    let mut bowling_stats = BTreeMap::new();
    for cells in rows(*bowling, BOWLING_COLUMNS.min_columns)? {
        let c = BOWLING_COLUMNS;
        bowling_stats.insert(
            cells[0].to_lowercase(),
            BowlingStats {
                balls: cells[c.balls].clone(),
                runs: cells[c.runs].clone(),
                wickets: cells[c.wickets].clone(),
                best_bowling_innings: cells[c.best_bowling_innings].clone(),
                economy: cells[c.economy].clone(),
                five_wickets: cells[c.five_wickets].clone(),
            },
        );
    }

    Ok((batting_stats, bowling_stats))
}

/// Cell texts of each body row that has at least `min_columns` cells.
fn rows(table: ElementRef<'_>, min_columns: usize) -> Result<Vec<Vec<String>>, ScrapeError> {
    let body = TABLE_BODY.require(table)?;
    let mut out = Vec::new();
    for row in select_all(body, "tr")? {
        let cells: Vec<String> = select_all(row, "td")?.into_iter().map(text_of).collect();
        if cells.len() >= min_columns {
            out.push(cells);
        }
    }
    Ok(out)
}
