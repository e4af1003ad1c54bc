use matchboard::{MatchboardClient, Source};

#[tokio::main]
async fn main() {
    let mut client = MatchboardClient::new("http://localhost:3000");

    client.resolve_identity().await;
    client.refresh_search().await.unwrap();
    client.refresh_home().await.unwrap();

    println!(
        "search: {} matches, recommended: {}, featured: {}",
        client.catalog().get(Source::Search).len(),
        client.catalog().get(Source::Recommended).len(),
        client.catalog().get(Source::Featured).len(),
    );

    for m in client.filter(Source::Search, "cricket") {
        println!(
            "{} | {} | {}, {} | looking for {} players",
            m.name, m.sport, m.address.area, m.address.city, m.players_required
        );
    }

    let Some(id) = client
        .catalog()
        .get(Source::Search)
        .first()
        .map(|m| m.id.clone())
    else {
        println!("no matches posted");
        return;
    };

    client.open_detail(Source::Search, &id).unwrap();
    match client.join(&id).await {
        Ok(outcome) => {
            println!("{}", outcome.message);
            let detail = client.detail().unwrap();
            println!(
                "{} now looking for {} players",
                detail.snapshot().name,
                detail.snapshot().players_required
            );
        }
        Err(e) => println!("join failed: {e}"),
    }
}
