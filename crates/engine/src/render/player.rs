//! Player card fragment.

use mesa_domain::{specialization, Die, Player, Pool};

use super::escape;

/// One player's card. Derived stats are recomputed here on every
/// render; nothing stale from disk reaches the page.
pub fn player_card(player: &Player) -> String {
    let stats = player.stats();
    let card_id = format!("player-{}", player.id);
    let mut html = String::with_capacity(2048);

    html.push_str(&format!(
        "<div class=\"player-card\" id=\"{card_id}\">\n<header>\n\
         <h2>{name}</h2> <span class=\"age\">{age}</span>\n",
        name = escape(&player.name),
        age = escape(&player.age),
    ));
    html.push_str(&format!(
        "<span class=\"level\">Nível {level}</span>\n\
         <button hx-post=\"/level/{id}/dec\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">-</button>\n\
         <button hx-post=\"/level/{id}/inc\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">+</button>\n\
         <button hx-delete=\"/delete/{id}\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">Excluir</button>\n\
         </header>\n",
        level = player.level,
        id = player.id,
    ));

    html.push_str("<ul class=\"attrs\">\n");
    for (label, value) in [
        ("VIG", stats.final_attrs.vigor),
        ("AGI", stats.final_attrs.agility),
        ("INT", stats.final_attrs.intellect),
        ("PER", stats.final_attrs.perception),
        ("PRE", stats.final_attrs.presence),
    ] {
        html.push_str(&format!("<li>{label} {value}</li>\n"));
    }
    html.push_str("</ul>\n");

    html.push_str("<ul class=\"specs\">\n");
    for spec_id in &player.specs {
        let name = specialization::get(spec_id).map_or(spec_id.as_str(), |s| s.name);
        html.push_str(&format!("<li>{}</li>\n", escape(name)));
    }
    html.push_str("</ul>\n");

    for (label, stat_key, pool, max) in [
        ("PV", "current_pv", Pool::Pv, stats.pv_max),
        ("PS", "current_ps", Pool::Ps, stats.ps_max),
        ("PA", "current_pa", Pool::Pa, stats.pa_max),
    ] {
        html.push_str(&format!(
            "<div class=\"pool\">{label} {current}/{max}\n\
             <button hx-post=\"/update_stat/{id}/{stat_key}/dec\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">-</button>\n\
             <button hx-post=\"/update_stat/{id}/{stat_key}/inc\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">+</button>\n\
             </div>\n",
            current = player.pool(pool),
            id = player.id,
        ));
    }

    html.push_str("<div class=\"dice\">\n");
    for die in Die::player_dice() {
        let last = player
            .dice
            .get(die)
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        html.push_str(&format!(
            "<button hx-post=\"/roll/{id}/{die}\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">{label} ({last})</button>\n",
            id = player.id,
            label = die.label(),
        ));
    }
    html.push_str("</div>\n");

    html.push_str("<ul class=\"inventory\">\n");
    for item in &player.inventory {
        html.push_str(&format!(
            "<li>{name} x{qty}\n\
             <button hx-post=\"/inventory/update/{pid}/{iid}/dec\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">-</button>\n\
             <button hx-post=\"/inventory/update/{pid}/{iid}/inc\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">+</button>\n\
             <button hx-post=\"/inventory/reorder/{pid}/{iid}/up\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">&#8593;</button>\n\
             <button hx-post=\"/inventory/reorder/{pid}/{iid}/down\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">&#8595;</button>\n\
             <button hx-delete=\"/inventory/delete/{pid}/{iid}\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">x</button>\n\
             </li>\n",
            name = escape(&item.name),
            qty = item.qty,
            pid = player.id,
            iid = item.id,
        ));
    }
    html.push_str("</ul>\n");

    html.push_str(&format!(
        "<form hx-post=\"/inventory/add/{id}\" hx-target=\"#{card_id}\" hx-swap=\"outerHTML\">\n\
         <input name=\"item_name\" placeholder=\"Novo item\">\n\
         <button type=\"submit\">Adicionar</button>\n\
         </form>\n</div>\n",
        id = player.id,
    ));

    html
}
