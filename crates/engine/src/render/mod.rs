//! Server-rendered HTML for the HTMX dashboard.
//!
//! No template engine: fragments are small and assembled with
//! `format!`. Everything user-entered goes through [`escape`].

use mesa_domain::{specialization, Attribute, GameState, Player};

mod game_state;
mod player;

pub use game_state::{dm_dice, doom_clock};
pub use player::player_card;

/// Minimal HTML escaping for text interpolated into fragments.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The full dashboard: session panel, GM tools, create form, and one
/// card per player.
pub fn page(players: &[Player], game_state: &GameState) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Mesa</title>\n\
         <script src=\"https://unpkg.com/htmx.org@1.9.12\"></script>\n\
         </head>\n<body>\n<h1>Mesa</h1>\n",
    );

    html.push_str("<section id=\"session\">\n");
    html.push_str(&game_state::scene_panel(game_state));
    html.push_str(&doom_clock(game_state));
    html.push_str(&dm_dice(game_state));
    html.push_str("</section>\n");

    html.push_str(&create_form());

    html.push_str("<section id=\"players\">\n");
    for player in players {
        html.push_str(&player_card(player));
    }
    html.push_str("</section>\n</body>\n</html>\n");
    html
}

fn create_form() -> String {
    let mut html = String::from(
        "<form id=\"create-player\" action=\"/add\" method=\"post\">\n\
         <input name=\"name\" placeholder=\"Nome\" required>\n\
         <input name=\"age\" placeholder=\"Idade\" required>\n",
    );
    for attr in Attribute::all() {
        html.push_str(&format!(
            "<label>{label} <input type=\"number\" name=\"{key}\" value=\"0\" min=\"0\" max=\"10\"></label>\n",
            label = attr.display_name(),
            key = attr.as_str(),
        ));
    }
    for spec in specialization::all() {
        html.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"specs\" value=\"{id}\"> {name}</label>\n",
            id = spec.id,
            name = spec.name,
        ));
    }
    html.push_str("<button type=\"submit\">Criar ficha</button>\n</form>\n");
    html
}
