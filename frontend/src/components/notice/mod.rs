//! Transient banner for the admin panel.
//!
//! The banner is plain state: it renders whatever notice the `NoticeBoard` holds. The
//! 3-second expiry is scheduled by the admin effect runner with a `TimeoutFuture`,
//! so nothing here touches the DOM directly.

use common::workflow::Notice;
use yew::prelude::*;

pub fn notice_banner(notice: Option<&Notice>) -> Html {
    match notice {
        Some(notice) => html! {
            <div class={classes!("message", notice.kind.class())} role="status">
                { notice.text.clone() }
            </div>
        },
        None => html! {},
    }
}
