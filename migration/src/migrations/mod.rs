pub mod m202510190001_create_weather;
