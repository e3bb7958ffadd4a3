use anyhow::{bail, Context};
use chrono::{Local, NaiveTime};
use colored::Colorize;
use marquee_catalog::movie::{MovieDraft, MovieUpdate};
use marquee_catalog::room::{RoomDraft, RoomLayout};
use marquee_catalog::show::{ShowDraft, ShowUpdate};
use marquee_client::CatalogApi;
use marquee_core::seat::RemoteSeatState;
use marquee_sales::printing::format_cents;

use crate::cli::{MoviesAction, RoomsAction, ShowsAction};
use crate::commands::split_label;

pub async fn movies(action: MoviesAction, catalog: &CatalogApi) -> anyhow::Result<()> {
    match action {
        MoviesAction::List => {
            for movie in catalog.movies().await? {
                let flag = if movie.now_showing {
                    "showing".green()
                } else {
                    "retired".dimmed()
                };
                println!(
                    "{:>4}  {:<32} {:>4} min  {:<4} {}",
                    movie.id, movie.title, movie.duration_min, movie.rating, flag
                );
            }
        }
        MoviesAction::Add {
            title,
            duration,
            rating,
            genre,
            synopsis,
            poster_url,
        } => {
            let draft = MovieDraft {
                title,
                duration_min: duration,
                rating,
                genre,
                synopsis,
                poster_url,
            };
            draft.validate()?;
            let movie = catalog.create_movie(&draft).await?;
            println!("created movie {} ({})", movie.id, movie.title);
        }
        MoviesAction::Retire { movie_id } => {
            let movie = catalog.update_movie(movie_id, &MovieUpdate::retire()).await?;
            println!("retired movie {} ({})", movie.id, movie.title);
        }
        MoviesAction::Remove { movie_id } => {
            catalog.delete_movie(movie_id).await?;
            println!("removed movie {movie_id}");
        }
    }
    Ok(())
}

pub async fn rooms(action: RoomsAction, catalog: &CatalogApi) -> anyhow::Result<()> {
    match action {
        RoomsAction::List => {
            for room in catalog.rooms().await? {
                println!("{:>4}  {:<24} {:>4} seats", room.id, room.name, room.capacity);
            }
        }
        RoomsAction::Add { name, capacity } => {
            let draft = RoomDraft { name, capacity };
            draft.validate()?;
            let room = catalog.create_room(&draft).await?;
            println!("created room {} ({})", room.id, room.name);
        }
        RoomsAction::Configure {
            room_id,
            rows,
            seats_per_row,
            disable,
        } => {
            let mut layout = RoomLayout::grid(room_id, rows, seats_per_row)?;
            for label in &disable {
                let (row, number) = split_label(label)
                    .with_context(|| format!("invalid seat label {label}"))?;
                layout.set_seat_enabled(&row, number, false)?;
            }
            let seat_count = layout.seat_count();
            catalog.submit_layout(&layout.into_batch()).await?;
            println!("room {room_id} configured with {seat_count} seats");
        }
        RoomsAction::Seats { room_id } => {
            for seat in catalog.room_seats(room_id).await? {
                println!("{:>6}  {:<4} {:?}", seat.id, seat.label(), seat.state);
            }
        }
        RoomsAction::DisableSeat { room_id, seat_id } => {
            catalog
                .set_seat_state(room_id, seat_id, RemoteSeatState::Disabled)
                .await?;
            println!("seat {seat_id} disabled");
        }
        RoomsAction::EnableSeat { room_id, seat_id } => {
            catalog
                .set_seat_state(room_id, seat_id, RemoteSeatState::Available)
                .await?;
            println!("seat {seat_id} enabled");
        }
    }
    Ok(())
}

pub async fn shows(action: ShowsAction, catalog: &CatalogApi) -> anyhow::Result<()> {
    match action {
        ShowsAction::List => {
            for show in catalog.shows().await? {
                println!(
                    "{:>4}  {:<32} {:<12} {} {}  {}",
                    show.id,
                    show.movie_title,
                    show.room_name,
                    show.date,
                    show.time.format("%H:%M"),
                    format_cents(show.base_price_cents),
                );
            }
        }
        ShowsAction::Schedule {
            movie_id,
            room_id,
            date,
            time,
            price,
        } => {
            let draft = ShowDraft {
                movie_id,
                room_id,
                date,
                time: parse_time(&time)?,
                base_price_cents: crate::cli::to_cents(price),
            };
            draft.validate(Local::now().date_naive())?;
            let show = catalog.schedule_show(&draft).await?;
            println!("scheduled show {} on {} at {}", show.id, show.date, show.time);
        }
        ShowsAction::Reschedule {
            show_id,
            date,
            time,
            price,
        } => {
            let update = ShowUpdate {
                date,
                time: time.as_deref().map(parse_time).transpose()?,
                base_price_cents: price.map(crate::cli::to_cents),
            };
            let show = catalog.update_show(show_id, &update).await?;
            println!("show {} now on {} at {}", show.id, show.date, show.time);
        }
        ShowsAction::Cancel { show_id } => {
            catalog.cancel_show(show_id).await?;
            println!("cancelled show {show_id}");
        }
    }
    Ok(())
}

fn parse_time(value: &str) -> anyhow::Result<NaiveTime> {
    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
        return Ok(time);
    }
    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M:%S") {
        return Ok(time);
    }
    bail!("invalid time {value}, expected HH:MM")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(
            parse_time("19:30").unwrap(),
            NaiveTime::from_hms_opt(19, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("19:30:15").unwrap(),
            NaiveTime::from_hms_opt(19, 30, 15).unwrap()
        );
        assert!(parse_time("7pm").is_err());
    }
}
