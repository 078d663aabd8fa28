use super::{file_field, input_field, layout, submit_button, textarea_field};
use crate::db::models::{Building, City, District, Unit};

/// Create and edit share one form per entity: `existing` pre-fills the
/// inputs and switches the action to the edit endpoint.
fn form_shell(title: &str, action: &str, fields: &str, caption: &str) -> String {
    let body = format!(
        "<div class=\"container mt-5\"><h1 class=\"mb-4\">{title}</h1>\
         <form action=\"{action}\" method=\"post\" enctype=\"multipart/form-data\">\
         {fields}{submit}</form></div>",
        submit = submit_button(caption),
    );
    layout(title, &body)
}

pub fn city_form_page(existing: Option<&City>) -> String {
    let (title, action, caption) = match existing {
        Some(city) => ("Edit City", format!("/edit/city/{}", city.id), "Save City"),
        None => ("Create New City", "/create_city".to_string(), "Create City"),
    };
    let own = |f: fn(&City) -> String| existing.map(f).unwrap_or_default();

    let fields = [
        input_field(
            "number",
            "Player ID:",
            "playerId",
            &own(|c| c.player_id.to_string()),
            "Enter Player ID",
        ),
        input_field(
            "text",
            "City Name:",
            "name",
            existing.map(|c| c.name.as_str()).unwrap_or(""),
            "Enter City Name",
        ),
        input_field(
            "number",
            "Population:",
            "population",
            &own(|c| c.population.to_string()),
            "Enter Population",
        ),
        file_field("City Photo:", "photo"),
    ]
    .concat();

    form_shell(title, &action, &fields, caption)
}

pub fn district_form_page(existing: Option<&District>) -> String {
    let (title, action, caption) = match existing {
        Some(district) => (
            "Edit District",
            format!("/edit/district/{}", district.id),
            "Save District",
        ),
        None => (
            "Create New District",
            "/create_district".to_string(),
            "Create District",
        ),
    };
    let own = |f: fn(&District) -> String| existing.map(f).unwrap_or_default();

    let fields = [
        input_field(
            "number",
            "City ID:",
            "cityId",
            &own(|d| d.city_id.to_string()),
            "Enter City ID",
        ),
        input_field(
            "text",
            "District Name:",
            "name",
            existing.map(|d| d.name.as_str()).unwrap_or(""),
            "Enter District Name",
        ),
        input_field(
            "number",
            "Production Cost:",
            "productionCost",
            &own(|d| d.production_cost.to_string()),
            "",
        ),
        file_field("Photo:", "photo"),
    ]
    .concat();

    form_shell(title, &action, &fields, caption)
}

pub fn building_form_page(existing: Option<&Building>) -> String {
    let (title, action, caption) = match existing {
        Some(building) => (
            "Edit Building",
            format!("/edit/building/{}", building.id),
            "Save Building",
        ),
        None => (
            "Create New Building",
            "/create_building".to_string(),
            "Create Building",
        ),
    };
    let own = |f: fn(&Building) -> String| existing.map(f).unwrap_or_default();

    let fields = [
        input_field(
            "number",
            "District ID:",
            "districtId",
            &own(|b| b.district_id.to_string()),
            "Enter District ID",
        ),
        input_field(
            "text",
            "Building Name:",
            "name",
            existing.map(|b| b.name.as_str()).unwrap_or(""),
            "",
        ),
        input_field(
            "number",
            "Production Cost:",
            "productionCost",
            &own(|b| b.production_cost.to_string()),
            "",
        ),
        input_field(
            "number",
            "Production:",
            "production",
            &own(|b| b.production.to_string()),
            "",
        ),
        input_field("number", "Food:", "food", &own(|b| b.food.to_string()), ""),
        input_field("number", "Gold:", "gold", &own(|b| b.gold.to_string()), ""),
        input_field(
            "number",
            "Defense:",
            "defense",
            &own(|b| b.defense.to_string()),
            "",
        ),
        textarea_field(
            "Description:",
            "description",
            existing.map(|b| b.description.as_str()).unwrap_or(""),
        ),
        file_field("Photo Upload:", "photo"),
    ]
    .concat();

    form_shell(title, &action, &fields, caption)
}

pub fn unit_form_page(existing: Option<&Unit>) -> String {
    let (title, action, caption) = match existing {
        Some(unit) => ("Edit Unit", format!("/edit/unit/{}", unit.id), "Save Unit"),
        None => ("Create New Unit", "/create_unit".to_string(), "Create Unit"),
    };
    let own = |f: fn(&Unit) -> String| existing.map(f).unwrap_or_default();

    let fields = [
        input_field(
            "number",
            "Player ID:",
            "playerId",
            &own(|u| u.player_id.to_string()),
            "Enter Player ID",
        ),
        input_field(
            "text",
            "Unit Name:",
            "name",
            existing.map(|u| u.name.as_str()).unwrap_or(""),
            "",
        ),
        input_field(
            "number",
            "Damage:",
            "damage",
            &own(|u| u.damage.to_string()),
            "",
        ),
        input_field(
            "number",
            "Health:",
            "health",
            &own(|u| u.health.to_string()),
            "",
        ),
        input_field(
            "number",
            "Movement:",
            "movement",
            &own(|u| u.movement.to_string()),
            "",
        ),
        input_field(
            "number",
            "Production Cost:",
            "productionCost",
            &own(|u| u.production_cost.to_string()),
            "",
        ),
        input_field(
            "number",
            "Salary:",
            "salary",
            &own(|u| u.salary.to_string()),
            "",
        ),
        textarea_field(
            "Description:",
            "description",
            existing.map(|u| u.description.as_str()).unwrap_or(""),
        ),
        file_field("Photo Upload:", "photo"),
    ]
    .concat();

    form_shell(title, &action, &fields, caption)
}
