//! Session fragments: scene panel, doom clock, GM dice.

use mesa_domain::{Die, GameState};

use super::escape;

pub(super) fn scene_panel(state: &GameState) -> String {
    format!(
        "<div id=\"scene\">\n\
         <input name=\"location\" value=\"{location}\" hx-post=\"/gamestate/update\" hx-trigger=\"change\" hx-swap=\"none\">\n\
         <input name=\"time\" value=\"{time}\" hx-post=\"/gamestate/update\" hx-trigger=\"change\" hx-swap=\"none\">\n\
         <textarea name=\"notes\" hx-post=\"/gamestate/update\" hx-trigger=\"change\" hx-swap=\"none\">{notes}</textarea>\n\
         </div>\n",
        location = escape(&state.location),
        time = escape(&state.time),
        notes = escape(&state.notes),
    )
}

/// Doom clock fragment: one pip per segment plus the three controls.
pub fn doom_clock(state: &GameState) -> String {
    let mut html = format!(
        "<div id=\"doom-clock\">\n<span class=\"count\">{}/{}</span>\n",
        state.doom_clock, state.doom_max
    );
    for segment in 1..=state.doom_max {
        let class = if segment <= state.doom_clock {
            "pip filled"
        } else {
            "pip"
        };
        html.push_str(&format!("<span class=\"{class}\"></span>\n"));
    }
    html.push_str(
        "<button hx-post=\"/gamestate/doom/dec\" hx-target=\"#doom-clock\" hx-swap=\"outerHTML\">-</button>\n\
         <button hx-post=\"/gamestate/doom/inc\" hx-target=\"#doom-clock\" hx-swap=\"outerHTML\">+</button>\n\
         <button hx-post=\"/gamestate/doom/reset\" hx-target=\"#doom-clock\" hx-swap=\"outerHTML\">Zerar</button>\n\
         </div>\n",
    );
    html
}

/// GM dice fragment: the seven-die set and the last result.
pub fn dm_dice(state: &GameState) -> String {
    let mut html = String::from("<div id=\"dm-dice\">\n");
    for die in Die::gm_dice() {
        html.push_str(&format!(
            "<button hx-post=\"/gamestate/roll_dm/{die}\" hx-target=\"#dm-dice\" hx-swap=\"outerHTML\">{}</button>\n",
            die.label(),
        ));
    }
    match (state.dm_last_roll, state.dm_last_die.as_deref()) {
        (Some(roll), Some(die)) => {
            html.push_str(&format!(
                "<span class=\"last-roll\">{}: {roll}</span>\n",
                escape(die)
            ));
        }
        _ => html.push_str("<span class=\"last-roll\">-</span>\n"),
    }
    html.push_str("</div>\n");
    html
}
