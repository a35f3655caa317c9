use super::*;

impl LocationRepo for DbConnection<'_> {
    fn get_province(&self, code: &PsgcCode) -> Result<Province> {
        get(&self.tables().provinces, code)
    }
    fn get_city(&self, code: &PsgcCode) -> Result<City> {
        get(&self.tables().cities, code)
    }
    fn get_barangay(&self, code: &PsgcCode) -> Result<Barangay> {
        get(&self.tables().barangays, code)
    }
    fn get_development(&self, id: Id) -> Result<Development> {
        get(&self.tables().developments, &id)
    }

    fn all_provinces(&self) -> Result<Vec<Province>> {
        Ok(self.tables().provinces.values().cloned().collect())
    }
    fn cities_of_province(&self, province: &PsgcCode) -> Result<Vec<City>> {
        Ok(self
            .tables()
            .cities
            .values()
            .filter(|c| &c.province == province)
            .cloned()
            .collect())
    }
    fn barangays_of_city(&self, city: &PsgcCode) -> Result<Vec<Barangay>> {
        Ok(self
            .tables()
            .barangays
            .values()
            .filter(|b| &b.city == city)
            .cloned()
            .collect())
    }

    fn upsert_province(&self, province: Province) -> Result<()> {
        self.tables_mut()?
            .provinces
            .insert(province.code.clone(), province);
        Ok(())
    }
    fn upsert_city(&self, city: City) -> Result<()> {
        self.tables_mut()?.cities.insert(city.code.clone(), city);
        Ok(())
    }
    fn upsert_barangay(&self, barangay: Barangay) -> Result<()> {
        self.tables_mut()?
            .barangays
            .insert(barangay.code.clone(), barangay);
        Ok(())
    }
    fn upsert_development(&self, development: Development) -> Result<()> {
        self.tables_mut()?
            .developments
            .insert(development.id, development);
        Ok(())
    }
}
