use dioxus::prelude::*;
use types::society::{Building, BuildingPatch, NewBuilding, Society};
use uuid::Uuid;

use crate::use_notice;

fn society_name(societies: &[Society], id: Uuid) -> String {
    societies
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Unknown society".into())
}

#[component]
pub fn Buildings() -> Element {
    let mut notice = use_notice();

    let mut buildings = use_signal(Vec::<Building>::new);
    let mut societies = use_signal(Vec::<Society>::new);
    let mut loading = use_signal(|| true);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<Building>);

    use_effect(move || {
        spawn(async move {
            loading.set(true);

            let buildings_result = api::get_buildings(None).await;
            let societies_result = api::get_societies().await;

            match (buildings_result, societies_result) {
                (Ok(b), Ok(s)) => {
                    buildings.set(b);
                    societies.set(s);
                }
                (Err(e), _) | (_, Err(e)) => {
                    notice.error(e.to_string());
                }
            }
            loading.set(false);
        });
    });

    let refresh = move || {
        spawn(async move {
            if let Ok(b) = api::get_buildings(None).await {
                buildings.set(b);
            }
        });
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Buildings" }
                    p { class: "page-subtitle", "Manage the society, building, and wing hierarchy." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                        "Add Building"
                    }
                }
            }

            if *show_form.read() {
                BuildingFormModal {
                    societies: societies.read().clone(),
                    editing: editing(),
                    on_close: move |_| show_form.set(false),
                    on_saved: move |_| {
                        show_form.set(false);
                        refresh();
                    },
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading buildings..." }
            } else if buildings.read().is_empty() {
                div { class: "card empty-state",
                    p { "No buildings yet. Add the first one." }
                }
            } else {
                div { class: "card-grid",
                    for building in buildings.read().iter() {
                        {
                            let building = building.clone();
                            let edit_target = building.clone();
                            let building_id = building.id;
                            let building_name = building.name.clone();
                            let society = society_name(&societies.read(), building.society_id);
                            rsx! {
                                div { class: "card building-card",
                                    div { class: "card-header",
                                        h2 { class: "card-title", "{building.name}" }
                                        span { class: "text-muted", "{society}" }
                                    }
                                    div { class: "building-card-body",
                                        div { class: "building-fact",
                                            span { class: "building-fact-value", "{building.total_floors}" }
                                            span { class: "building-fact-label", "Floors" }
                                        }
                                        div { class: "building-fact",
                                            span { class: "building-fact-value", "{building.total_flats}" }
                                            span { class: "building-fact-label", "Flats" }
                                        }
                                        div { class: "building-fact",
                                            span { class: "building-fact-value", "{building.wings.len()}" }
                                            span { class: "building-fact-label", "Wings" }
                                        }
                                    }
                                    if !building.wings.is_empty() {
                                        div { class: "building-wings",
                                            for wing in building.wings.iter() {
                                                span { class: "badge badge-muted", "{wing.name}" }
                                            }
                                        }
                                    }
                                    div { class: "card-footer",
                                        button {
                                            class: "btn btn-link",
                                            onclick: move |_| {
                                                editing.set(Some(edit_target.clone()));
                                                show_form.set(true);
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-link btn-link-danger",
                                            onclick: move |_| {
                                                let building_name = building_name.clone();
                                                spawn(async move {
                                                    match api::delete_building(building_id).await {
                                                        Ok(()) => {
                                                            notice.success(format!("Building {building_name} deleted"));
                                                            refresh();
                                                        }
                                                        Err(e) => notice.error(e.to_string()),
                                                    }
                                                });
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BuildingFormModal(
    societies: Vec<Society>,
    editing: Option<Building>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut notice = use_notice();

    let mut name = use_signal(|| editing.as_ref().map(|b| b.name.clone()).unwrap_or_default());
    let mut society_id = use_signal(|| {
        editing
            .as_ref()
            .map(|b| b.society_id)
            .or_else(|| societies.first().map(|s| s.id))
    });
    let mut total_floors = use_signal(|| {
        editing
            .as_ref()
            .map(|b| b.total_floors.to_string())
            .unwrap_or_default()
    });
    let mut total_flats = use_signal(|| {
        editing
            .as_ref()
            .map(|b| b.total_flats.to_string())
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);

    let editing_id = editing.as_ref().map(|b| b.id);
    let title = if editing.is_some() { "Edit Building" } else { "Add Building" };
    let can_submit = !name.read().is_empty() && society_id.read().is_some();

    let societies_for_select = societies.clone();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "building-name", "Name *" }
                        input {
                            id: "building-name",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. Tower C",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "building-society", "Society *" }
                        select {
                            id: "building-society",
                            class: "form-input",
                            onchange: move |e| {
                                society_id.set(e.value().parse::<Uuid>().ok());
                            },
                            for society in societies_for_select.iter() {
                                option {
                                    value: "{society.id}",
                                    selected: society_id() == Some(society.id),
                                    "{society.name}"
                                }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "building-floors", "Total Floors" }
                        input {
                            id: "building-floors",
                            class: "form-input",
                            r#type: "number",
                            min: "0",
                            value: "{total_floors}",
                            oninput: move |e| total_floors.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "building-flats", "Total Flats" }
                        input {
                            id: "building-flats",
                            class: "form-input",
                            r#type: "number",
                            min: "0",
                            value: "{total_flats}",
                            oninput: move |e| total_flats.set(e.value()),
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_submit || *saving.read(),
                        onclick: move |_| {
                            let Some(society) = society_id() else { return };
                            let floors = total_floors.read().parse().unwrap_or(0);
                            let flats = total_flats.read().parse().unwrap_or(0);
                            let name_value = name.read().clone();
                            spawn(async move {
                                saving.set(true);
                                let result = match editing_id {
                                    Some(id) => api::update_building(
                                        id,
                                        BuildingPatch {
                                            name: Some(name_value.clone()),
                                            society_id: Some(society),
                                            total_floors: Some(floors),
                                            total_flats: Some(flats),
                                        },
                                    )
                                    .await,
                                    None => api::create_building(NewBuilding {
                                        name: name_value.clone(),
                                        society_id: society,
                                        wings: Vec::new(),
                                        total_floors: floors,
                                        total_flats: flats,
                                    })
                                    .await,
                                };
                                match result {
                                    Ok(building) => {
                                        let verb = if editing_id.is_some() { "updated" } else { "created" };
                                        notice.success(format!("Building {} {verb}", building.name));
                                        on_saved.call(());
                                    }
                                    Err(e) => notice.error(e.to_string()),
                                }
                                saving.set(false);
                            });
                        },
                        if *saving.read() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
