//! Seed road network for the four-city demo.
//!
//! Hospitals and neighbourhoods of Coimbatore, Tiruppur, Erode and Salem,
//! joined by intra-city roads and a handful of inter-city links.  Distances
//! are in kilometres; multipliers are typical peak-hour congestion.

use std::io::Cursor;

use ems_network::{NetworkResult, RoadGraph, load_locations_reader, load_roads_reader};

const LOCATIONS_CSV: &str = "\
name,is_facility,capacity\n\
Ganga Hospital,true,10\n\
Coimbatore Medical College Hospital,true,12\n\
PSG Hospitals,true,8\n\
KMCH (Kovai Medical Center and Hospital),true,9\n\
Royal Care Hospital,true,6\n\
Lotus Eye Hospital,true,5\n\
K.G. Hospital,true,9\n\
Sankara Eye Hospital,true,5\n\
Sri Ramakrishna Hospital,true,7\n\
Revathi Medical Center,true,7\n\
Aravind Eye Hospital Tiruppur,true,5\n\
Tiruppur Government Hospital,true,10\n\
Velan Hospital,true,6\n\
Mahalakshmi Hospital,true,8\n\
Erode Trust Hospital,true,8\n\
KMC Hospital Erode,true,6\n\
Shree Hospital,true,5\n\
Erode Government Hospital,true,12\n\
Arokya Hospital,true,7\n\
Vinayaka Missions Hospital,true,11\n\
SKS Hospital,true,9\n\
Salem Government Hospital,true,15\n\
Manipal Hospital Salem,true,8\n\
Sudar Hospital,true,5\n\
Rathinapuri,false,\n\
Gandhipuram,false,\n\
Singanallur,false,\n\
Saravanampatti,false,\n\
Ukkadam,false,\n\
Anupparpalayam,false,\n\
Palladam,false,\n\
Avinashi,false,\n\
Veerapandi,false,\n\
Perundurai,false,\n\
Kavindapadi,false,\n\
Bhavani,false,\n\
Gobichettipalayam,false,\n\
Ammapet,false,\n\
Fairlands,false,\n\
Hasthampatti,false,\n\
Suramangalam,false,\n\
";

const ROADS_CSV: &str = "\
from,to,distance,traffic\n\
Rathinapuri,Ganga Hospital,4,1.1\n\
Gandhipuram,Royal Care Hospital,5,1.0\n\
Singanallur,Coimbatore Medical College Hospital,6,1.0\n\
Saravanampatti,KMCH (Kovai Medical Center and Hospital),7,1.3\n\
Ukkadam,K.G. Hospital,6,1.1\n\
Royal Care Hospital,KMCH (Kovai Medical Center and Hospital),11,1.4\n\
Ganga Hospital,K.G. Hospital,6,1.1\n\
PSG Hospitals,Sri Ramakrishna Hospital,5,1.2\n\
Rathinapuri,Sri Ramakrishna Hospital,4,1.2\n\
Gandhipuram,PSG Hospitals,5,1.1\n\
Singanallur,Lotus Eye Hospital,8,1.2\n\
Saravanampatti,Sankara Eye Hospital,9,1.3\n\
Ukkadam,Ganga Hospital,6,1.2\n\
Revathi Medical Center,Aravind Eye Hospital Tiruppur,5,1.2\n\
Tiruppur Government Hospital,Velan Hospital,3,1.1\n\
Revathi Medical Center,Mahalakshmi Hospital,4,1.3\n\
Tiruppur Government Hospital,Palladam,6,1.2\n\
Aravind Eye Hospital Tiruppur,Velan Hospital,7,1.1\n\
Anupparpalayam,Revathi Medical Center,5,1.1\n\
Palladam,Tiruppur Government Hospital,4,1.2\n\
Avinashi,Aravind Eye Hospital Tiruppur,6,1.3\n\
Veerapandi,Velan Hospital,5,1.1\n\
Palladam,Mahalakshmi Hospital,7,1.0\n\
Erode Trust Hospital,KMC Hospital Erode,7,1.1\n\
Shree Hospital,Arokya Hospital,3,1.4\n\
Erode Government Hospital,Perundurai,5,1.1\n\
KMC Hospital Erode,Erode Government Hospital,4,1.2\n\
Perundurai,Erode Trust Hospital,6,1.0\n\
Kavindapadi,KMC Hospital Erode,4,1.2\n\
Bhavani,Shree Hospital,3,1.3\n\
Gobichettipalayam,Erode Government Hospital,7,1.2\n\
Vinayaka Missions Hospital,SKS Hospital,6,1.1\n\
Salem Government Hospital,Sudar Hospital,5,1.0\n\
Manipal Hospital Salem,Fairlands,7,1.2\n\
SKS Hospital,Sudar Hospital,4,1.1\n\
Ammapet,Vinayaka Missions Hospital,8,1.2\n\
Fairlands,SKS Hospital,5,1.1\n\
Hasthampatti,Salem Government Hospital,6,1.0\n\
Suramangalam,Manipal Hospital Salem,6,1.3\n\
Sri Ramakrishna Hospital,Revathi Medical Center,40,1.6\n\
Sri Ramakrishna Hospital,Erode Trust Hospital,52,1.4\n\
Revathi Medical Center,Vinayaka Missions Hospital,45,1.5\n\
Erode Trust Hospital,SKS Hospital,48,1.3\n\
Royal Care Hospital,Revathi Medical Center,42,1.5\n\
KMCH (Kovai Medical Center and Hospital),Tiruppur Government Hospital,30,1.4\n\
PSG Hospitals,Aravind Eye Hospital Tiruppur,38,1.3\n\
K.G. Hospital,Vinayaka Missions Hospital,50,1.6\n\
Coimbatore Medical College Hospital,Shree Hospital,47,1.2\n\
";

/// Build the seed graph.  Returns it with the number of roads applied.
pub fn build_network() -> NetworkResult<(RoadGraph, usize)> {
    let mut graph = RoadGraph::new();
    load_locations_reader(Cursor::new(LOCATIONS_CSV), &mut graph)?;
    let roads = load_roads_reader(Cursor::new(ROADS_CSV), &mut graph)?;
    Ok((graph, roads))
}
