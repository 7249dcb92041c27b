mod occupancy;
mod colours;
