use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use shopfront_data::BlogPost;
use shopfront_observability::StructuredLogger;

use super::{LoadState, NotFound};
use crate::components::BlogCard;
use crate::config::StorefrontConfig;
use crate::lifetime::InstanceGuard;
use crate::services::Services;

/// Latest posts from the WordPress site, newest first as a featured card.
#[component]
pub fn BlogPage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let services = expect_context::<Services>();
    let logger = StructuredLogger::new("BlogPage").with_route("/blog");
    let guard = InstanceGuard::new();
    let (posts, set_posts) = signal(LoadState::<Vec<BlogPost>>::Loading);

    {
        let guard = guard.clone();
        let wordpress = services.wordpress.clone();
        let per_page = config.blog_posts_per_page;
        spawn_local(async move {
            let next = match wordpress.recent_posts(per_page).await {
                Ok(list) if list.is_empty() => LoadState::Missing,
                Ok(list) => LoadState::Ready(list),
                Err(err) => {
                    logger
                        .warn_builder("Blog posts unavailable")
                        .field("base_url", wordpress.base_url().to_string())
                        .field("error", err.to_string())
                        .emit();
                    LoadState::Failed(err.to_string())
                }
            };
            guard.run(|| set_posts.try_set(next));
        });
    }
    on_cleanup(move || guard.dispose());

    view! {
        <h2>"Blog"</h2>
        {move || match posts.get() {
            LoadState::Loading => view! { <p class="loading">"Loading posts\u{2026}"</p> }.into_any(),
            LoadState::Missing => view! { <p>"No posts yet."</p> }.into_any(),
            LoadState::Failed(message) => view! {
                <p style="color: red;">"Could not load posts: " {message}</p>
                <a href="/wordpress-test">"Run the WordPress connection test"</a>
            }
            .into_any(),
            LoadState::Ready(list) => view! {
                <div class="blog-grid">
                    {list
                        .into_iter()
                        .enumerate()
                        .map(|(index, post)| view! { <BlogCard post=post featured={index == 0} index=index/> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        }}
    }
}

/// Single post, routed at `/blog/:slug`.
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));
    let services = expect_context::<Services>();
    let logger = StructuredLogger::new("BlogPostPage");
    let guard = InstanceGuard::new();
    let (post, set_post) = signal(LoadState::<BlogPost>::Loading);

    Effect::new({
        let guard = guard.clone();
        move |_| {
            let requested = slug.get();
            set_post.set(LoadState::Loading);

            let wordpress = services.wordpress.clone();
            let guard = guard.clone();
            let logger = logger.clone();
            spawn_local(async move {
                let next = match wordpress.post_by_slug(&requested).await {
                    Ok(Some(found)) => LoadState::Ready(found),
                    Ok(None) => LoadState::Missing,
                    Err(err) => {
                        logger
                            .warn_builder("Blog post unavailable")
                            .field("slug", requested.clone())
                            .field("error", err.to_string())
                            .emit();
                        LoadState::Failed(err.to_string())
                    }
                };
                guard.run(|| {
                    if slug.try_get_untracked().as_ref() == Some(&requested) {
                        set_post.try_set(next);
                    }
                });
            });
        }
    });
    on_cleanup(move || guard.dispose());

    view! {
        {move || match post.get() {
            LoadState::Loading => view! { <p class="loading">"Loading post\u{2026}"</p> }.into_any(),
            LoadState::Missing => view! { <NotFound/> }.into_any(),
            LoadState::Failed(message) => view! {
                <p style="color: red;">"Could not load post: " {message}</p>
            }
            .into_any(),
            LoadState::Ready(found) => view! { <BlogArticle post=found/> }.into_any(),
        }}
    }
}

#[component]
fn BlogArticle(post: BlogPost) -> impl IntoView {
    let published = post.published_display();
    let datetime = post.published.to_string();
    let body = if post.paragraphs.is_empty() {
        vec![post.excerpt.clone()]
    } else {
        post.paragraphs.clone()
    };

    view! {
        <article class="blog-post">
            <a href="/blog">"\u{2190} All posts"</a>
            <h1>{post.title.clone()}</h1>
            <p class="blog-post-meta">
                <time datetime=datetime>{published}</time>
                {post.author.clone().map(|author| view! { " \u{00B7} " {author} })}
            </p>
            {post.image_url.clone().map(|src| {
                view! { <img class="blog-post-image aspect-video" src=src alt=post.title.clone()/> }
            })}
            {body.into_iter().map(|text| view! { <p>{text}</p> }).collect::<Vec<_>>()}
        </article>
    }
}
