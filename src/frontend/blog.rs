use yew::prelude::*;
use yew_router::prelude::*;

use super::{animation::RevealBox, Route};
use crate::{
    content::{lookup_article, ArticleLookup, Block, BlogPost},
    motion::{Direction, Easing, Reveal},
};

const COMING_SOON: &str = "This article is coming soon...";
const MISSING: &str = "Article not found";

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading(text) => html! { <h2>{*text}</h2> },
        Block::Subheading(text) => html! { <h3>{*text}</h3> },
        Block::Paragraph(text) => html! { <p>{*text}</p> },
        Block::Code(source) => html! { <pre><code>{*source}</code></pre> },
        Block::List(items) => html! {
            <ul>
                { for items.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ArticleProps {
    post: &'static BlogPost,
    body: &'static [Block],
}

#[function_component(Article)]
fn article(props: &ArticleProps) -> Html {
    let post = props.post;
    let tags = post
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        <div class="article-page">
            <header class="article-hero">
                <div class="section-inner">
                    <Link<Route> to={Route::Home} classes="back-link">{"← Back to Portfolio"}</Link<Route>>
                    <RevealBox reveal={Reveal::fade_in(None, Easing::EaseOut, 0.1, 1.0)}>
                        <p class="section-subtext accent">
                            {format!("{} • {} min read", post.long_date(), post.read_time_min)}
                        </p>
                        <h1 class="article-title">{post.title}</h1>
                    </RevealBox>
                </div>
            </header>

            <RevealBox
                reveal={Reveal::fade_in(Some(Direction::Up), Easing::Spring, 0.3, 1.0)}
                class="section-inner article-card"
            >
                <img class="article-media" src={post.image} alt={post.title} />
                <div class="prose">
                    <p class="lead">{post.excerpt}</p>
                    { for props.body.iter().map(render_block) }
                    <p class="article-tags muted">{format!("Tags: {tags}")}</p>
                </div>
            </RevealBox>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    #[prop_or(AttrValue::Static(MISSING))]
    pub message: AttrValue,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p class="muted">{props.message.clone()}</p>
            <Link<Route> to={Route::Home} classes="button-primary">{"Back to Home"}</Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: AttrValue,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    match lookup_article(&props.slug) {
        ArticleLookup::Found(post, body) => html! { <Article post={post} body={body} /> },
        ArticleLookup::ComingSoon(post) => {
            log::debug!("article {} has no body yet", post.slug);
            html! { <NotFound message={COMING_SOON} /> }
        }
        ArticleLookup::Missing => {
            log::info!("no article for slug {}", props.slug);
            html! { <NotFound /> }
        }
    }
}
