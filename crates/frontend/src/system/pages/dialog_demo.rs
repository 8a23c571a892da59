use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DEMO};
use crate::shared::theme::use_theme;
use leptos::prelude::*;
use thaw::*;

/// Демо диалога: кнопка открывает модальное окно в цветах текущей темы.
#[component]
#[allow(non_snake_case)]
pub fn DialogDemo() -> impl IntoView {
    let theme = use_theme();
    let is_open = RwSignal::new(false);
    let close = Callback::new(move |_: ()| is_open.set(false));

    view! {
        <PageFrame page_id="dialog_demo--demo" category=PAGE_CAT_DEMO>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dialog"</h1>
                </div>
            </div>

            <div class="page__content">
                <p class="page__hint">
                    {move || format!("Primary colour: {}", theme.theme.get().palette().primary)}
                </p>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| is_open.set(true)>
                    "Open dialog"
                </Button>
            </div>

            <Show when=move || is_open.get()>
                <Modal
                    title="Edit profile"
                    description="Make changes to your profile here. Click close when you're done."
                    on_close=close
                >
                    <div class="modal-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| close.run(())>
                            "Close"
                        </Button>
                    </div>
                </Modal>
            </Show>
        </PageFrame>
    }
}
