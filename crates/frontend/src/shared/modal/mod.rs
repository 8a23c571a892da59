use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно поверх затемнённого фона.
///
/// Закрывается по Escape, по клику на фон и по кнопке в заголовке.
/// Цвета берутся из CSS-переменных текущей темы.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Short text under the title
    #[prop(optional, into)]
    description: Option<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional action buttons (Save, Cancel, etc.) to display in header
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        {move || action_buttons.as_ref().map(|buttons| buttons())}
                        <button
                            class="button button--icon modal__close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </button>
                    </div>
                </div>
                {description.map(|text| view! { <p class="modal-description">{text}</p> })}
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
