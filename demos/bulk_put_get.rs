use std::time::{SystemTime, UNIX_EPOCH};

use ds3::{Client, ObjectDescriptor};

#[allow(clippy::result_large_err)]
fn main() -> Result<(), ds3::Error> {
    let client = match Client::from_env() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("Set DS3_ENDPOINT, DS3_ACCESS_KEY and DS3_SECRET_KEY to run this demo: {err}");
            return Ok(());
        }
    };

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let bucket = format!("ds3-demo-{now}");

    let resp = client.buckets().create(&bucket).send()?;
    println!("create {bucket}: {}", resp.status());

    let objects = [
        ObjectDescriptor::new("beowulf.txt", 294_059),
        ObjectDescriptor::new("ulysses.txt", 1_540_095),
    ];
    let job = client.bulk_put(&bucket, objects.clone())?;
    println!("bulk put job:\n{}", String::from_utf8_lossy(&job));

    let job = client.bulk_get(&bucket, objects.iter().map(|o| o.name.as_str()))?;
    println!("bulk get job:\n{}", String::from_utf8_lossy(&job));

    let listing = client.list_bucket(&bucket)?;
    println!("listing:\n{}", String::from_utf8_lossy(&listing));
    Ok(())
}
