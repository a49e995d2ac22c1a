use leptos::prelude::*;

/// Labelled text input with an optional red badge ("Required", "Too Short")
/// shown while the field is in error
#[component]
pub fn FormInput(
    value: RwSignal<String>,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(optional, into)] error: Signal<bool>,
    #[prop(optional, into)] badge: Signal<Option<&'static str>>,
    #[prop(optional)] autofocus: bool,
    #[prop(optional, into)] on_input: Option<Callback<()>>,
    #[prop(optional, into)] on_focus: Option<Callback<bool>>,
) -> impl IntoView {
    let badge_text = move || if error.get() { badge.get() } else { None };

    view! {
        <div class="field">
            {label.map(|label| view! { <label>{label}</label> })}
            <div class="input-action">
                <input
                    type=kind
                    placeholder=placeholder
                    autocomplete=autocomplete
                    maxlength=max_length
                    autofocus=autofocus
                    class:error=move || error.get()
                    prop:value=value
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        if let Some(on_input) = on_input {
                            on_input.run(());
                        }
                    }
                    on:focus=move |_| {
                        if let Some(on_focus) = on_focus {
                            on_focus.run(true);
                        }
                    }
                    on:blur=move |_| {
                        if let Some(on_focus) = on_focus {
                            on_focus.run(false);
                        }
                    }
                />
                {move || badge_text().map(|text| view! { <span class="input-label error">{text}</span> })}
            </div>
        </div>
    }
}
