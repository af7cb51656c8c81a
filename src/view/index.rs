use maud::{Markup, html};

use crate::HTMX_PATH;

pub const INDEX_TITLE: &str = "Cricket Stats";

/// Landing page. Every endpoint link is relative so the app can live under a
/// path prefix.
#[must_use]
pub fn render_index_template() -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (INDEX_TITLE) }
            script src=(HTMX_PATH) defer {}
            script src="static/players.js" defer {}
        }
        body {
            h1 { (INDEX_TITLE) }
            section {
                h2 { "Player" }
                form id="player-form" data-endpoint="players/" {
                    input type="text" name="name" placeholder="Player name" required;
                    button type="submit" { "Look up" }
                }
                pre id="player" {}
            }
            section {
                h2 { "Upcoming international series" }
                button hx-get="schedule" hx-target="#schedule" { "Load schedule" }
                pre id="schedule" {}
            }
            section {
                h2 { "Live scores" }
                button hx-get="live" hx-target="#live" { "Load live scores" }
                pre id="live" {}
            }
        }
    }
}
