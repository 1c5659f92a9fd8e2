use chrono::Utc;
use isoduration::IsoDuration;

fn main() {
    let now = Utc::now();
    let every: IsoDuration = "P1MT12H".parse().expect("valid duration");

    println!("duration: {every}");
    println!("now:      {now}");
    println!("+{every}: {}", every.shift(now));
    println!("-{every}: {}", every.unshift(now));
    println!("time part as elapsed: {}", every.to_elapsed());

    match "P1D2F".parse::<IsoDuration>() {
        Ok(d) => println!("unexpected: {d}"),
        Err(err) => println!("error: {err}"),
    }
}
