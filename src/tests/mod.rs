#[cfg(test)]
mod common;


#[cfg(test)]
mod test_loader;




#[cfg(test)]
mod test_lookup_interface;
