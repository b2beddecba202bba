//! Blog post teaser card.

use leptos::prelude::*;
use shopfront_data::BlogPost;

/// Delay before the first card fades in.
pub const BASE_REVEAL_DELAY_MS: u64 = 100;
/// Extra delay per card position.
pub const REVEAL_STEP_MS: u64 = 50;

/// Presentation choices derived from a card's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogCardLayout {
    pub featured: bool,
    pub index: usize,
}

impl BlogCardLayout {
    pub fn new(featured: bool, index: usize) -> Self {
        Self { featured, index }
    }

    /// 16:9 for the featured card, square otherwise.
    pub fn image_class(&self) -> &'static str {
        if self.featured {
            "blog-card-image aspect-video"
        } else {
            "blog-card-image aspect-square"
        }
    }

    pub fn aspect_ratio(&self) -> &'static str {
        if self.featured {
            "16 / 9"
        } else {
            "1 / 1"
        }
    }

    pub fn title_class(&self) -> &'static str {
        if self.featured {
            "blog-card-title text-2xl"
        } else {
            "blog-card-title text-lg"
        }
    }

    pub fn animation_delay_ms(&self) -> u64 {
        let index = u64::try_from(self.index).unwrap_or(u64::MAX);
        BASE_REVEAL_DELAY_MS.saturating_add(index.saturating_mul(REVEAL_STEP_MS))
    }

    pub fn card_style(&self) -> String {
        format!("animation-delay: {}ms", self.animation_delay_ms())
    }
}

#[component]
pub fn BlogCard(
    post: BlogPost,
    #[prop(optional)] featured: bool,
    #[prop(optional)] index: usize,
) -> impl IntoView {
    let layout = BlogCardLayout::new(featured, index);
    let href = post.path();
    let published = post.published_display();
    let datetime = post.published.to_string();
    let image = post.image_url.clone().map(|src| {
        let alt = post.title.clone();
        view! { <img src=src alt=alt loading="lazy"/> }
    });
    let title = if featured {
        view! { <h2 class=layout.title_class()>{post.title.clone()}</h2> }.into_any()
    } else {
        view! { <h3 class=layout.title_class()>{post.title.clone()}</h3> }.into_any()
    };

    view! {
        <article class="blog-card fade-in" class:featured=featured style=layout.card_style()>
            <a href=href>
                <div
                    class=layout.image_class()
                    style=format!("aspect-ratio: {}", layout.aspect_ratio())
                >
                    {image}
                </div>
                <div class="blog-card-body">
                    <time datetime=datetime>{published}</time>
                    {title}
                    <p class="blog-card-excerpt">{post.excerpt}</p>
                    {post.author.map(|author| view! { <p class="blog-card-author">"By " {author}</p> })}
                </div>
            </a>
        </article>
    }
}
