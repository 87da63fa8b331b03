//! Holidaze CLI
//!
//! Maps commands to the view controllers:
//! - Log in / register / log out
//! - Browse and page through venues
//! - Show venue detail and book it
//! - Create / update / delete venues
//! - Show and edit the profile and its bookings

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use holidaze::views::{
    AuthView, BookingEdit, CreateVenueView, FetchState, ProfileView, VenueDetailView,
    VenueListView,
};
use holidaze::{
    ApiClient, Booking, FileStore, GatewayConfig, Profile, RegisterRequest, SessionManager, Venue,
};

#[derive(Parser)]
#[command(name = "holidaze")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the Holidaze venue booking API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Register a new account (and log in)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Avatar URL
        #[arg(long)]
        avatar: Option<String>,
        /// Register as a venue manager
        #[arg(long)]
        venue_manager: bool,
    },

    /// Log out and clear the stored session
    Logout,

    /// List venues, one page at a time
    Venues {
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(short, long, default_value = "20")]
        limit: u32,
        /// Sort field (e.g. created, price, name)
        #[arg(short, long, default_value = "created")]
        sort: String,
        /// Sort order (asc or desc)
        #[arg(long, default_value = "desc")]
        order: String,
    },

    /// Show a venue, its newest booking, and its amenities
    Venue { id: String },

    /// List bookings, optionally for one venue
    Bookings {
        /// Only bookings for this venue
        #[arg(long)]
        venue_id: Option<String>,
    },

    /// Book a venue
    Book {
        venue_id: String,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "1")]
        guests: u32,
    },

    /// Create a new venue
    CreateVenue {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Media URLs, comma separated
        #[arg(long, default_value = "")]
        media: String,
        #[arg(long, default_value = "0")]
        price: f64,
        #[arg(long, default_value = "1")]
        max_guests: u32,
        #[arg(long, default_value = "0")]
        rating: f64,
        #[arg(long)]
        wifi: bool,
        #[arg(long)]
        parking: bool,
        #[arg(long)]
        breakfast: bool,
        #[arg(long)]
        pets: bool,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        zip: String,
        #[arg(long, default_value = "")]
        country: String,
        #[arg(long, default_value = "")]
        continent: String,
        #[arg(long, default_value = "0")]
        lat: f64,
        #[arg(long, default_value = "0")]
        lng: f64,
    },

    /// Update a venue (sends the full snapshot)
    UpdateVenue {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Append one media URL to the venue
        #[arg(long)]
        add_image: Option<String>,
    },

    /// Delete a venue (no confirmation)
    DeleteVenue { id: String },

    /// Show a profile with its venues and bookings
    Profile {
        /// Profile name (defaults to the logged-in user)
        name: Option<String>,
    },

    /// Edit a booking; omitted fields stay unchanged
    EditBooking {
        id: String,
        /// New check-in date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        from: String,
        /// New check-out date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        to: String,
        #[arg(long, default_value = "")]
        guests: String,
    },

    /// Cancel a booking
    CancelBooking { id: String },

    /// Set the venue-manager flag on your profile
    SetManager { value: bool },

    /// Set your avatar URL
    SetAvatar { url: String },

    /// Generate a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = holidaze::Config::load_default();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("holidaze={}", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Config subcommand needs no client.
    if let Commands::Config { output } = &cli.command {
        let content = holidaze::config::generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let gateway = GatewayConfig {
        base_url: cli.api_url.unwrap_or(config.api.base_url),
        request_timeout_secs: config.api.request_timeout_secs,
    };

    let store = FileStore::new(&config.session.file);
    let session = Arc::new(SessionManager::new(Box::new(store))?);
    let api = ApiClient::new(gateway, session.clone());

    match cli.command {
        Commands::Login { email, password } => {
            let mut view = AuthView::new();
            if view.login(&api, &session, &email, &password).await {
                match session.username() {
                    Some(name) => println!("Logged in as {}", name),
                    None => println!("Logged in"),
                }
            } else {
                fail(&view.error);
            }
        }

        Commands::Register {
            name,
            email,
            password,
            avatar,
            venue_manager,
        } => {
            let request = RegisterRequest {
                name,
                email,
                password,
                avatar,
                venue_manager,
            };
            let mut view = AuthView::new();
            if view.register(&api, &session, &request).await {
                println!("Registered and logged in as {}", request.name);
            } else {
                fail(&view.error);
            }
        }

        Commands::Logout => {
            let mut view = AuthView::new();
            if view.logout(&session) {
                println!("Logged out");
            } else {
                fail(&view.error);
            }
        }

        Commands::Venues {
            page,
            limit,
            sort,
            order,
        } => {
            let mut view = VenueListView::new(limit, &sort, &order);
            view.set_page(page);
            view.load(&api).await;

            match &view.state {
                FetchState::Loaded(venues) => {
                    print_venue_table(venues);
                    println!();
                    println!(
                        "Page {} ({} venues){}",
                        view.page(),
                        venues.len(),
                        if view.has_previous() { "" } else { " - first page" }
                    );
                }
                FetchState::Failed(reason) => {
                    eprintln!("{}", reason);
                    std::process::exit(1);
                }
                _ => {}
            }
        }

        Commands::Venue { id } => {
            let mut view = VenueDetailView::new(&id);
            view.load(&api).await;

            match &view.state {
                FetchState::Loaded(venue) => {
                    print_venue(venue);
                    if let Some(booking) = &view.newest_booking {
                        println!();
                        println!("Newest booking:");
                        print_booking(booking);
                    }
                }
                FetchState::Failed(reason) => {
                    eprintln!("{}", reason);
                    std::process::exit(1);
                }
                _ => {}
            }
        }

        Commands::Bookings { venue_id } => match api.list_bookings(venue_id.as_deref()).await {
            Ok(bookings) if bookings.is_empty() => println!("No bookings."),
            Ok(bookings) => {
                for booking in &bookings {
                    print_booking(booking);
                    println!();
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },

        Commands::Book {
            venue_id,
            from,
            to,
            guests,
        } => {
            validate_date(&from)?;
            validate_date(&to)?;

            let mut view = VenueDetailView::new(&venue_id);
            if view.book(&api, &from, &to, guests).await {
                println!("Booked venue {} from {} to {} for {} guests", venue_id, from, to, guests);
            } else {
                fail(&view.error);
            }
        }

        Commands::CreateVenue {
            name,
            description,
            media,
            price,
            max_guests,
            rating,
            wifi,
            parking,
            breakfast,
            pets,
            address,
            city,
            zip,
            country,
            continent,
            lat,
            lng,
        } => {
            let mut view = CreateVenueView::new();
            view.form.name = name;
            view.form.description = description;
            view.form.set_media(&media);
            view.form.price = price;
            view.form.max_guests = max_guests;
            view.form.rating = rating;
            view.form.meta.wifi = wifi;
            view.form.meta.parking = parking;
            view.form.meta.breakfast = breakfast;
            view.form.meta.pets = pets;
            view.form.location.address = address;
            view.form.location.city = city;
            view.form.location.zip = zip;
            view.form.location.country = country;
            view.form.location.continent = continent;
            view.form.location.lat = lat;
            view.form.location.lng = lng;

            if view.submit(&api).await {
                if let Some(message) = &view.success {
                    println!("{}", message);
                }
            } else {
                fail(&view.error);
            }
        }

        Commands::UpdateVenue {
            id,
            name,
            description,
            add_image,
        } => {
            let mut view = VenueDetailView::new(&id);
            view.load(&api).await;

            if let FetchState::Failed(reason) = &view.state {
                eprintln!("{}", reason);
                std::process::exit(1);
            }

            view.edit(|venue| {
                if let Some(name) = name {
                    venue.name = name;
                }
                if let Some(description) = description {
                    venue.description = description;
                }
            });
            if let Some(url) = add_image {
                view.new_image = url;
            }

            if view.update(&api).await {
                println!("Venue updated");
            } else {
                fail(&view.error);
            }
        }

        Commands::DeleteVenue { id } => {
            let mut view = VenueDetailView::new(&id);
            if view.delete(&api).await {
                println!("Venue deleted");
            } else {
                fail(&view.error);
            }
        }

        Commands::Profile { name } => {
            let name = match name.or_else(|| session.username()) {
                Some(name) => name,
                None => {
                    eprintln!("No profile name stored. Log in first or pass a name.");
                    std::process::exit(1);
                }
            };

            let mut view = ProfileView::new(&name);
            view.load(&api).await;

            match &view.profile {
                FetchState::Loaded(profile) => print_profile(profile),
                FetchState::Failed(reason) => eprintln!("{}", reason),
                _ => {}
            }

            println!();
            match &view.venues {
                FetchState::Loaded(venues) if venues.is_empty() => println!("No venues."),
                FetchState::Loaded(venues) => {
                    println!("Venues:");
                    print_venue_table(venues);
                }
                FetchState::Failed(reason) => eprintln!("{}", reason),
                _ => {}
            }

            println!();
            match &view.bookings {
                FetchState::Loaded(bookings) if bookings.is_empty() => println!("No bookings."),
                FetchState::Loaded(bookings) => {
                    println!("Bookings:");
                    for booking in bookings {
                        print_booking(booking);
                        println!();
                    }
                }
                FetchState::Failed(reason) => eprintln!("{}", reason),
                _ => {}
            }
        }

        Commands::EditBooking {
            id,
            from,
            to,
            guests,
        } => {
            if !from.is_empty() {
                validate_date(&from)?;
            }
            if !to.is_empty() {
                validate_date(&to)?;
            }

            let name = match session.username() {
                Some(name) => name,
                None => {
                    eprintln!("No profile name stored. Log in first.");
                    std::process::exit(1);
                }
            };

            // The edit works against the user's own booking list.
            let mut view = ProfileView::new(&name);
            view.load(&api).await;

            let edit = BookingEdit {
                date_from: from,
                date_to: to,
                guests,
            };
            if view.edit_booking(&api, &id, &edit).await {
                println!("Booking {} is up to date", id);
            } else {
                fail(&view.error);
            }
        }

        Commands::CancelBooking { id } => {
            let name = session.username().unwrap_or_default();
            let mut view = ProfileView::new(&name);
            if view.delete_booking(&api, &id).await {
                println!("Booking {} cancelled", id);
            } else {
                fail(&view.error);
            }
        }

        Commands::SetManager { value } => {
            let name = match session.username() {
                Some(name) => name,
                None => {
                    eprintln!("No profile name stored. Log in first.");
                    std::process::exit(1);
                }
            };

            let mut view = ProfileView::new(&name);
            if view.set_venue_manager(&api, value).await {
                println!("Venue manager: {}", if value { "yes" } else { "no" });
            } else {
                fail(&view.error);
            }
        }

        Commands::SetAvatar { url } => {
            let name = match session.username() {
                Some(name) => name,
                None => {
                    eprintln!("No profile name stored. Log in first.");
                    std::process::exit(1);
                }
            };

            let mut view = ProfileView::new(&name);
            if view.set_avatar(&api, &url).await {
                println!("Avatar updated");
            } else {
                fail(&view.error);
            }
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Print the view's error and exit non-zero.
fn fail(error: &Option<String>) -> ! {
    if let Some(message) = error {
        eprintln!("{}", message);
    }
    std::process::exit(1);
}

fn validate_date(s: &str) -> anyhow::Result<()> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| anyhow::anyhow!("Invalid date: {} (expected YYYY-MM-DD)", s))
}

fn print_venue_table(venues: &[Venue]) {
    if venues.is_empty() {
        println!("No venues on this page.");
        return;
    }

    println!(
        "{:<38} {:<24} {:>8} {:>7} {:>7}  {}",
        "ID", "Name", "Price", "Guests", "Rating", "City"
    );
    println!("{}", "-".repeat(100));

    for venue in venues {
        println!(
            "{:<38} {:<24} {:>8.1} {:>7} {:>7.1}  {}",
            venue.id,
            truncate(&venue.name, 24),
            venue.price,
            venue.max_guests,
            venue.rating,
            venue.location.city
        );
    }
}

fn print_venue(venue: &Venue) {
    println!("{}", venue.name);
    println!("{}", "-".repeat(venue.name.len().max(8)));
    println!("Description: {}", venue.description);
    for url in &venue.media {
        println!("Media: {}", url);
    }
    println!("Price: ${}", venue.price);
    println!("Max guests: {}", venue.max_guests);
    println!("Rating: {}", venue.rating);
    if !venue.created.is_empty() {
        println!("Created: {}", venue.created);
    }
    if !venue.updated.is_empty() {
        println!("Updated: {}", venue.updated);
    }
    println!("Amenities:");
    println!("  WiFi: {}", yes_no(venue.meta.wifi));
    println!("  Parking: {}", yes_no(venue.meta.parking));
    println!("  Breakfast: {}", yes_no(venue.meta.breakfast));
    println!("  Pets: {}", yes_no(venue.meta.pets));
    println!(
        "Location: {}, {}, {}, {}",
        venue.location.address, venue.location.city, venue.location.zip, venue.location.country
    );
    println!("Bookings: {}", venue.bookings.len());
}

fn print_booking(booking: &Booking) {
    println!("  Id: {}", booking.id);
    println!("  From: {}", booking.date_from);
    println!("  To: {}", booking.date_to);
    println!("  Guests: {}", booking.guests);
    if !booking.created.is_empty() {
        println!("  Created: {}", booking.created);
    }
    if !booking.updated.is_empty() {
        println!("  Updated: {}", booking.updated);
    }
}

fn print_profile(profile: &Profile) {
    println!("Name: {}", profile.name);
    println!("Email: {}", profile.email);
    if let Some(avatar) = &profile.avatar {
        println!("Avatar: {}", avatar);
    }
    println!("Venue manager: {}", yes_no(profile.venue_manager));
    println!("Venues count: {}", profile.count.venues);
    println!("Bookings count: {}", profile.count.bookings);
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
