use appnexus_client::prelude::*;
use prettytable::{Table, row};
use tracing::{error, info};

fn print_segments(segments: &[Segment]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Code", "Short name", "State", "Last modified"]);
    for segment in segments {
        table.add_row(row![
            segment.id.map(|id| id.to_string()).unwrap_or_default(),
            segment.code.clone().unwrap_or_default(),
            segment.short_name,
            segment.state.clone().unwrap_or_default(),
            segment.last_modified.clone().unwrap_or_default()
        ]);
    }
    table.printstd();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("=== AppNexus Member Segment Example ===");

    let client = match Client::connect(Config::new()).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to log in: {}", e);
            return Err(e.into());
        }
    };

    let member = client.members().get_default().await?;
    info!("Member: {} ({})", member.name, member.id);

    let page = client
        .segments()
        .list(member.id, Some(&ListOptions::new(0, 20)))
        .await?;
    info!(
        "Showing {} of {} segments",
        page.len(),
        page.count.unwrap_or_default()
    );
    print_segments(&page.items);

    let mut segment = Segment::new(member.id, "Test segment");
    client.segments().add(member.id, &mut segment).await?;
    info!("Created segment {:?}", segment.id);

    segment.code = Some("go_client_test".to_string());
    client.segments().update(member.id, &segment).await?;
    info!("Updated segment code to {:?}", segment.code);

    client.segments().delete(member.id, &segment).await?;
    info!("Deleted segment {:?}", segment.id);

    info!("Rate: {}", client.rate().await);
    Ok(())
}
