mod car;
mod dashboard;
mod location;
mod login_history;
mod rental;
mod user;
