use dioxus::prelude::*;

use crate::model::label::ExpirationBucket;

#[component]
pub fn ExpirationBadge(bucket: ExpirationBucket) -> Element {
    let class = match bucket {
        ExpirationBucket::Expired => "badge-error",
        ExpirationBucket::Today => "badge-warning",
        ExpirationBucket::Soon => "badge-info",
        ExpirationBucket::Valid => "badge-success",
    };

    rsx!(
        span { class: "badge {class}",
            {bucket.badge()}
        }
    )
}
