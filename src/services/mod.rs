pub mod wait_times;
