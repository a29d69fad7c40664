use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{Notice, Notify},
    toast::{Toast, ToastId, ToastQueue, TOAST_DURATION_MS},
};

/// Handle to the page's toast queue, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn provide() -> Self {
        let toaster = Self {
            queue: RwSignal::new(ToastQueue::new()),
        };
        provide_context(toaster);
        toaster
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.maybe_update(|q| q.dismiss(id));
    }

    fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().cloned().collect())
    }
}

impl Notify for Toaster {
    fn notify(&mut self, notice: Notice) {
        self.queue.update(|q| {
            q.push(notice);
        });
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <ol
            aria-live="polite"
            class="fixed top-0 z-[100] flex max-h-screen w-full flex-col-reverse p-4 sm:bottom-0 sm:right-0 sm:top-auto sm:flex-col md:max-w-[420px]"
        >
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast toaster /> }
            />
        </ol>
    }
}

#[component]
fn ToastCard(toast: Toast, toaster: Toaster) -> impl IntoView {
    let id = toast.id;
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| toaster.dismiss(id), TOAST_DURATION_MS);
    start(());

    view! {
        <li
            role="status"
            class="pointer-events-auto relative flex w-full items-center justify-between gap-4 overflow-hidden rounded-md border bg-background p-6 pr-8 shadow-lg card-glass"
        >
            <div class="grid gap-1">
                <div class="text-sm font-semibold text-foreground">{toast.notice.title}</div>
                <div class="text-sm opacity-90 text-muted-foreground">
                    {toast.notice.description}
                </div>
            </div>
            <button
                type="button"
                aria-label="Close"
                class="absolute right-2 top-2 rounded-md p-1 text-foreground/50 hover:text-foreground"
                on:click=move |_| toaster.dismiss(id)
            >
                "✕"
            </button>
        </li>
    }
}
