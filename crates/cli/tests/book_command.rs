use assert_cmd::Command;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("busline-cli").unwrap();
    cmd.env("BUSLINE_ENV", "local")
        .env("BUSLINE_CONFIG_DIR", env!("CARGO_MANIFEST_DIR"))
        .env("RUST_LOG", "off");
    cmd
}

fn book(name: &str, destination: &str, seats: &str) -> String {
    let output = cli()
        .arg("book")
        .arg(format!("--name={name}"))
        .arg(format!("--destination={destination}"))
        .arg(format!("--seats={seats}"))
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn confirms_valid_booking() {
    assert_eq!(
        book("Alice", "Paris", "3"),
        "Booking confirmed for Alice to Paris. Seats: 3. Total fare: $30.\n"
    );
}

#[test]
fn rejects_negative_seats_without_failing() {
    assert_eq!(
        book("Eve", "London", "-5"),
        "Please fill in all fields correctly.\n"
    );
}

#[test]
fn missing_arguments_read_as_empty_fields() {
    cli()
        .args(["book", "--destination", "Rome", "--seats", "2"])
        .assert()
        .success()
        .stdout("Please fill in all fields correctly.\n");
}

#[test]
fn price_can_be_overridden_from_the_environment() {
    cli()
        .env("BUSLINE_BOOKING__PRICE_PER_SEAT", "12")
        .args(["book", "--name", "Dana", "--destination", "Berlin", "--seats", "2.8"])
        .assert()
        .success()
        .stdout("Booking confirmed for Dana to Berlin. Seats: 2. Total fare: $24.\n");
}

#[test]
fn routes_lists_bookings_prefix() {
    cli()
        .arg("routes")
        .assert()
        .success()
        .stdout("/api/bookings\n");
}

#[test]
fn unknown_environment_fails() {
    cli()
        .env("BUSLINE_ENV", "qa")
        .args(["book", "--name", "Alice"])
        .assert()
        .failure();
}
