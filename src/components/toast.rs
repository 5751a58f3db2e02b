use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::TOAST_DISMISS_MS;
use crate::enquiry::workflow::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_DISMISS_MS, move || on_close.emit(()));
                // dropping the handle cancels it if a newer notice replaces this one
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let variant = match props.notice.kind {
        NoticeKind::Default => "toast-default",
        NoticeKind::Destructive => "toast-destructive",
    };
    let role = match props.notice.kind {
        NoticeKind::Default => "status",
        NoticeKind::Destructive => "alert",
    };

    html! {
        <div class={classes!("toast", variant)} {role}>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    right: 1rem;
                    bottom: 1rem;
                    z-index: 200;
                    max-width: 24rem;
                    padding: 1rem 2.5rem 1rem 1.25rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
                    animation: toastIn 0.3s ease-out;
                }
                .toast-default { background: #ffffff; color: #111827; border: 1px solid rgba(0, 0, 0, 0.1); }
                .toast-destructive { background: #dc2626; color: #ffffff; }
                .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                .toast-description { font-size: 0.875rem; opacity: 0.9; }
                .toast-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    opacity: 0.7;
                }
                @keyframes toastIn {
                    from { transform: translateY(100%); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            <div class="toast-title">{props.notice.title}</div>
            <div class="toast-description">{props.notice.description}</div>
            <button class="toast-close" onclick={close} aria-label="Close">{"×"}</button>
        </div>
    }
}
