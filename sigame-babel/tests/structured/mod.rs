mod dispatch;
mod round_trip;
