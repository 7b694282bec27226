
mod unit_list_views;
