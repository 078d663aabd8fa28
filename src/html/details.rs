use super::{escape, layout};
use crate::db::models::{Building, City, District, EntityKind, Unit};
use std::fmt::Write;

/// Shared detail-page shell: photo, field table, and (for admins) the
/// edit/delete controls.
fn details_shell(
    kind: EntityKind,
    id: i64,
    name: &str,
    photo: &str,
    rows: &[(&str, String)],
    is_admin: bool,
) -> String {
    let mut dl = String::from("<dl class=\"row\">");
    for (label, value) in rows {
        let _ = write!(
            dl,
            "<dt class=\"col-sm-3\">{}</dt><dd class=\"col-sm-9\">{}</dd>",
            escape(label),
            escape(value)
        );
    }
    dl.push_str("</dl>");

    let controls = if is_admin {
        format!(
            "<a href=\"/edit/{kind}/{id}\" class=\"btn btn-primary me-2\">Edit</a>\
             <form method=\"post\" action=\"/delete_{kind}/{id}\" class=\"d-inline\">\
             <button type=\"submit\" class=\"btn btn-danger\">Delete</button></form>",
            kind = kind.as_str(),
        )
    } else {
        String::new()
    };

    let body = format!(
        "<div class=\"container mt-5\">\
         <h1 class=\"mb-4\">{name}</h1>\
         <img class=\"mb-4\" src=\"{photo}\" alt=\"{title} Photo\" style=\"max-width: 300px;\">\
         {dl}\
         {controls}\
         <div class=\"mt-3\"><a href=\"/entities/{kind}\">Back to list</a></div>\
         </div>",
        name = escape(name),
        photo = escape(photo),
        title = kind.title(),
        kind = kind.as_str(),
    );
    layout(&format!("{} Details", kind.title()), &body)
}

pub fn city_details_page(city: &City, building_count: i64, is_admin: bool) -> String {
    details_shell(
        EntityKind::City,
        city.id,
        &city.name,
        &city.photo_path,
        &[
            ("Player ID", city.player_id.to_string()),
            ("Population", city.population.to_string()),
            ("Buildings", building_count.to_string()),
        ],
        is_admin,
    )
}

pub fn district_details_page(district: &District, is_admin: bool) -> String {
    details_shell(
        EntityKind::District,
        district.id,
        &district.name,
        &district.photo_path,
        &[
            ("City ID", district.city_id.to_string()),
            ("Production Cost", district.production_cost.to_string()),
        ],
        is_admin,
    )
}

pub fn building_details_page(building: &Building, is_admin: bool) -> String {
    details_shell(
        EntityKind::Building,
        building.id,
        &building.name,
        &building.photo_path,
        &[
            ("District ID", building.district_id.to_string()),
            ("Description", building.description.clone()),
            ("Production", building.production.to_string()),
            ("Production Cost", building.production_cost.to_string()),
            ("Food", building.food.to_string()),
            ("Gold", building.gold.to_string()),
            ("Defense", building.defense.to_string()),
        ],
        is_admin,
    )
}

pub fn unit_details_page(unit: &Unit, is_admin: bool) -> String {
    details_shell(
        EntityKind::Unit,
        unit.id,
        &unit.name,
        &unit.photo_path,
        &[
            ("Player ID", unit.player_id.to_string()),
            ("Description", unit.description.clone()),
            ("Damage", unit.damage.to_string()),
            ("Health", unit.health.to_string()),
            ("Movement", unit.movement.to_string()),
            ("Production Cost", unit.production_cost.to_string()),
            ("Salary", unit.salary.to_string()),
        ],
        is_admin,
    )
}
