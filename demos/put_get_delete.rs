use std::time::{SystemTime, UNIX_EPOCH};

use ds3::Client;

#[allow(clippy::result_large_err)]
fn main() -> Result<(), ds3::Error> {
    let client = match Client::from_env() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("Set DS3_ENDPOINT, DS3_ACCESS_KEY and DS3_SECRET_KEY to run this demo: {err}");
            return Ok(());
        }
    };

    let bucket = match std::env::var("DS3_TEST_BUCKET") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Set DS3_TEST_BUCKET to a bucket you can write to.");
            return Ok(());
        }
    };

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let key = format!("demos/put-get-delete-{now}.txt");

    client
        .objects()
        .put(&bucket, &key)
        .body(b"hello from ds3-rs\n".to_vec())
        .send()?
        .error_for_status()?;

    let bytes = client.get_object(&bucket, &key)?;
    println!("downloaded {} bytes", bytes.len());

    let resp = client.objects().delete(&bucket, &key).send()?;
    println!("delete: {}", resp.status());
    Ok(())
}
