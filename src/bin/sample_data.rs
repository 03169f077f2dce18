// Seeds an in-memory store with sample records and prints the rendered
// descriptions, meta tags and canonical URLs.

use idea_models::entities::{Group, Idea, Like, User};
use idea_models::error::AppResult;
use idea_models::framework::entity::Entity;
use idea_models::framework::meta_tags::MetaTags;
use idea_models::framework::relation::TypedRef;
use idea_models::framework::url::CanonicalUrl;
use idea_models::infrastructure::{KindRegistry, ObjectStore};
use tracing::info;

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    info!("Generating sample data");

    let store = ObjectStore::new();
    let registry = KindRegistry::new();
    registry.register::<User>().await;
    registry.register::<Group>().await;
    registry.register::<Idea>().await;

    let mut alice = User::new("alice");
    let alice_id = alice.save(&store).await?;

    let mut cyclists = Group::new("cyclists");
    let cyclists_id = cyclists.save(&store).await?;

    let mut idea = Idea::new(
        "Better bicycle lanes",
        "Dedicated lanes on every arterial road.",
    );
    let idea_id = idea.save(&store).await?;

    let mut like = Like::new(
        TypedRef::to("user", alice_id.as_str()),
        TypedRef::to("idea", idea_id.as_str()),
    );
    like.save(&store).await?;

    let mut group_like = Like::new(
        TypedRef::to("group", cyclists_id.as_str()),
        TypedRef::to("idea", idea_id.as_str()),
    );
    group_like.save(&store).await?;

    println!("{}", like.describe(&registry, &store).await?);
    println!("{}", group_like.describe(&registry, &store).await?);
    println!("idea url: {}", idea.get_absolute_url()?);

    let tags = MetaTags {
        meta_keywords: Some("ideas,likes".to_string()),
        meta_description: Some("A collection of ideas worth liking".to_string()),
        ..Default::default()
    };
    println!("{}", tags.get_meta_tags());

    let kinds = registry.registered_kinds().await;
    info!(?kinds, "sample data ready");

    Ok(())
}
