use super::{escape, input_field, layout, submit_button};
use crate::db::models::{Entity, EntityKind};
use std::collections::HashMap;
use std::fmt::Write;

/// Filter inputs rendered (and echoed back) per entity kind:
/// (query key, label, input type).
fn filter_fields(kind: EntityKind) -> &'static [(&'static str, &'static str, &'static str)] {
    match kind {
        EntityKind::City => &[
            ("name", "City Name:", "text"),
            ("minPopulation", "Min Population:", "number"),
        ],
        EntityKind::District => &[
            ("cityId", "City ID:", "number"),
            ("productionCost", "Min Production Cost:", "number"),
        ],
        EntityKind::Building => &[
            ("districtId", "District ID:", "number"),
            ("production", "Min Production:", "number"),
            ("defense", "Min Defense:", "number"),
        ],
        EntityKind::Unit => &[
            ("playerId", "Player ID:", "number"),
            ("minDamage", "Min Damage:", "number"),
            ("minHealth", "Min Health:", "number"),
            ("minMovement", "Min Movement:", "number"),
        ],
    }
}

fn filter_form(kind: EntityKind, params: &HashMap<String, String>) -> String {
    let mut inputs = String::new();
    for (name, label, input_type) in filter_fields(kind) {
        let value = params.get(*name).map(String::as_str).unwrap_or("");
        inputs.push_str(&input_field(input_type, label, name, value, ""));
    }
    format!(
        "<form method=\"get\" action=\"/entities/{}\">{inputs}{}</form>",
        kind.as_str(),
        submit_button("Apply Filters"),
    )
}

/// Listing href for `page`, keeping whichever filters are present.
fn page_href(kind: EntityKind, params: &HashMap<String, String>, page: i64) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    ser.append_pair("page", &page.to_string());
    for (name, _, _) in filter_fields(kind) {
        if let Some(value) = params.get(*name).filter(|v| !v.is_empty()) {
            ser.append_pair(name, value);
        }
    }
    format!("/entities/{}?{}", kind.as_str(), ser.finish())
}

fn entity_card(entity: &Entity) -> String {
    let kind = entity.kind();
    format!(
        "<div class=\"col\"><div class=\"card h-100 text-center\">\
         <img class=\"card-img-top mx-auto d-block\" src=\"{photo}\" \
         alt=\"{title} Image\" style=\"width: 40%; height: auto;\">\
         <div class=\"card-body\"><h5 class=\"card-title\">{name}</h5>\
         <p class=\"card-text\">{summary}</p>\
         <a href=\"/details/{kind}/{id}\" class=\"btn btn-primary\">View Details</a>\
         </div></div></div>",
        photo = escape(entity.photo_path()),
        title = kind.title(),
        name = escape(entity.name()),
        summary = escape(&entity.summary()),
        kind = kind.as_str(),
        id = entity.id(),
    )
}

pub fn entity_list_page(
    kind: EntityKind,
    entities: &[Entity],
    params: &HashMap<String, String>,
    page: i64,
    page_size: i64,
) -> String {
    let mut cards = String::new();
    for entity in entities {
        cards.push_str(&entity_card(entity));
    }

    let mut pager = String::from("<div class=\"mt-4\">");
    if page > 1 {
        let _ = write!(
            pager,
            "<a class=\"me-3\" href=\"{}\">Previous page</a>",
            page_href(kind, params, page - 1)
        );
    }
    // A full page suggests there may be more rows.
    if entities.len() as i64 == page_size {
        let _ = write!(
            pager,
            "<a href=\"{}\">Next page</a>",
            page_href(kind, params, page + 1)
        );
    }
    pager.push_str("</div>");

    let body = format!(
        "<div class=\"container my-4\">\
         <h1 class=\"mb-4\">List of {title}</h1>\
         <div class=\"mb-3\">{filter_form}</div>\
         <a href=\"/create_{kind}\" class=\"btn btn-success mb-3\">Create {title}</a>\
         <div class=\"row row-cols-1 row-cols-md-3 g-4\">{cards}</div>\
         {pager}</div>",
        title = kind.title(),
        filter_form = filter_form(kind, params),
        kind = kind.as_str(),
    );
    layout(&format!("Entity List - {}", kind.as_str()), &body)
}
