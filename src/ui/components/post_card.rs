use crate::reddit::Post;
use dioxus::prelude::*;

/// One search result with its metadata and a link to the original post
#[component]
pub fn PostCard(post: Post) -> Element {
    let created = post.created_display();

    rsx! {
        li { class: "post-card",
            h3 { class: "post-title", "{post.title}" }
            p { class: "post-meta", "Author: {post.author}" }
            p { class: "post-meta", "Score: {post.score}" }
            p { class: "post-meta", "Comments: {post.comments}" }
            p { class: "post-meta", "Created: {created}" }
            a {
                class: "post-link",
                href: "{post.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Read more"
            }
        }
    }
}
