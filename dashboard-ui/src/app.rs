use crate::format::local_date;
use dashboard_core::{
    visible_incidents, DateSort, IncidentDraft, IncidentStore, Severity, SeverityFilter,
    ValidationError,
};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    let store = create_rw_signal(IncidentStore::seeded());
    let severity_filter = create_rw_signal(SeverityFilter::All);
    let date_sort = create_rw_signal(DateSort::NewestFirst);
    let draft = create_rw_signal(IncidentDraft::default());
    let notice = create_rw_signal(None::<String>);

    let visible = move || {
        store.with(|s| visible_incidents(s, severity_filter.get(), date_sort.get()))
    };

    let submit = move || {
        let mut pending = draft.get_untracked();
        let mut outcome = Err(ValidationError::EmptyTitle);
        store.update(|s| outcome = pending.submit(s));
        match outcome {
            Ok(_) => {
                draft.set(IncidentDraft::default());
                notice.set(None);
            }
            Err(err) => {
                logging::warn!("rejected incident submit: {err}");
                notice.set(Some("Please fill in all fields.".to_string()));
            }
        }
    };

    view! {
      <div class="dashboard">
        <h1>"AI Safety Incident Dashboard"</h1>

        <div class="controls">
          <label>
            "Filter Severity:"
            <select
              prop:value=move || severity_filter.get().as_str().to_string()
              on:change=move |ev| {
                severity_filter.set(SeverityFilter::parse(&event_target_value(&ev)))
              }
            >
              <option value="All">"All"</option>
              <option value="Low">"Low"</option>
              <option value="Medium">"Medium"</option>
              <option value="High">"High"</option>
            </select>
          </label>

          <label>
            "Sort by Date:"
            <select
              prop:value=move || date_sort.get().as_str().to_string()
              on:change=move |ev| date_sort.set(DateSort::parse(&event_target_value(&ev)))
            >
              <option value="newest">"Newest First"</option>
              <option value="oldest">"Oldest First"</option>
            </select>
          </label>

          <span class="meta">
            {move || format!("Showing {} of {} incidents", visible().len(), store.with(IncidentStore::len))}
          </span>
        </div>

        <div class="form">
          <input
            type="text"
            placeholder="Title"
            prop:value=move || draft.with(|d| d.title.clone())
            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
          />
          <textarea
            placeholder="Description"
            prop:value=move || draft.with(|d| d.description.clone())
            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
          ></textarea>
          <select
            prop:value=move || draft.with(|d| d.severity.as_str().to_string())
            on:change=move |ev| {
              draft.update(|d| d.severity = Severity::parse(&event_target_value(&ev)))
            }
          >
            <option value="Low">"Low"</option>
            <option value="Medium">"Medium"</option>
            <option value="High">"High"</option>
          </select>
          <button on:click=move |_| submit()>"Report New Incident"</button>
        </div>

        <Show when=move || notice.get().is_some() fallback=|| ()>
          <div class="notice">{move || notice.get().unwrap_or_default()}</div>
        </Show>

        <div class="incident-list">
          <For
            each=visible
            key=|i| (i.id, i.show_details)
            children=move |incident| {
              let id = incident.id;
              let title = incident.title.clone();
              let severity = incident.severity.to_string();
              let reported = local_date(&incident.reported_at);
              let label = if incident.show_details { "Hide Details" } else { "View Details" };
              let details = incident
                .show_details
                .then(|| view! { <div class="details">{incident.description.clone()}</div> });

              view! {
                <div class="incident">
                  <strong>{title}</strong>
                  <div class="meta">
                    <em>"Severity:"</em> " " {severity}
                    " | "
                    <em>"Reported:"</em> " " {reported}
                  </div>
                  <button on:click=move |_| store.update(|s| s.toggle_details(id))>
                    {label}
                  </button>
                  {details}
                </div>
              }
            }
          />
        </div>
      </div>
    }
}
